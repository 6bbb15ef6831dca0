use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the simulated table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub data: String,
    pub created_at: DateTime<Utc>,
}

impl Record {
    pub fn new(id: i64, data: impl Into<String>) -> Self {
        Self {
            id,
            data: data.into(),
            created_at: Utc::now(),
        }
    }
}
