//! CRUD service running flagged operations against the record table

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::random::base36_token;
use crate::domain::{CrudFlags, DomainError, Record, RecordRepository};

/// Result of one executed table operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OperationOutcome {
    Create {
        success: bool,
        #[serde(rename = "lastId")]
        last_id: i64,
    },
    Read {
        success: bool,
        count: usize,
    },
    Update {
        success: bool,
        #[serde(rename = "affectedRows")]
        affected_rows: u64,
    },
    Delete {
        success: bool,
        #[serde(rename = "affectedRows")]
        affected_rows: u64,
    },
}

/// Everything a `/crud` request did
#[derive(Debug, Clone)]
pub struct CrudReport {
    pub operations: Vec<OperationOutcome>,
    /// Rows seen by the read operation, when one ran
    pub data: Option<Vec<Record>>,
    /// Value written by create and update
    pub random_data: String,
}

#[derive(Debug)]
pub struct CrudService {
    repository: Arc<dyn RecordRepository>,
}

impl CrudService {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// Run the flagged operations in create, read, update, delete order
    pub async fn execute(&self, flags: CrudFlags) -> Result<CrudReport, DomainError> {
        let random_data = format!("Data_{}", base36_token(5));
        let mut report = CrudReport {
            operations: Vec::new(),
            data: None,
            random_data,
        };

        debug!(operation = %flags, data = %report.random_data, "Executing CRUD operations");

        if flags.create {
            let record = self.repository.insert(&report.random_data).await?;
            report.operations.push(OperationOutcome::Create {
                success: true,
                last_id: record.id,
            });
        }

        if flags.read {
            let rows = self.repository.list().await?;
            report.operations.push(OperationOutcome::Read {
                success: true,
                count: rows.len(),
            });
            report.data = Some(rows);
        }

        if flags.update {
            let affected_rows = self.repository.update_random(&report.random_data).await?;
            report.operations.push(OperationOutcome::Update {
                success: true,
                affected_rows,
            });
        }

        if flags.delete {
            let affected_rows = self.repository.delete_random().await?;
            report.operations.push(OperationOutcome::Delete {
                success: true,
                affected_rows,
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InMemoryRecordRepository;

    fn service() -> CrudService {
        CrudService::new(Arc::new(InMemoryRecordRepository::new()))
    }

    #[tokio::test]
    async fn test_operations_run_in_fixed_order() {
        let service = service();
        let report = service.execute(CrudFlags::parse("DURC").unwrap()).await.unwrap();

        let kinds: Vec<&str> = report
            .operations
            .iter()
            .map(|op| match op {
                OperationOutcome::Create { .. } => "create",
                OperationOutcome::Read { .. } => "read",
                OperationOutcome::Update { .. } => "update",
                OperationOutcome::Delete { .. } => "delete",
            })
            .collect();

        assert_eq!(kinds, vec!["create", "read", "update", "delete"]);
        assert_eq!(report.data.as_ref().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_create_then_read_sees_row() {
        let service = service();
        service.execute(CrudFlags::parse("C").unwrap()).await.unwrap();
        let report = service.execute(CrudFlags::parse("CR").unwrap()).await.unwrap();

        assert_eq!(
            report.operations[0],
            OperationOutcome::Create {
                success: true,
                last_id: 2
            }
        );
        assert_eq!(
            report.operations[1],
            OperationOutcome::Read {
                success: true,
                count: 2
            }
        );

        let rows = report.data.unwrap();
        assert_eq!(rows[1].data, report.random_data);
    }

    #[tokio::test]
    async fn test_empty_flags_touch_nothing() {
        let report = service().execute(CrudFlags::default()).await.unwrap();

        assert!(report.operations.is_empty());
        assert!(report.data.is_none());
        assert!(report.random_data.starts_with("Data_"));
        assert_eq!(report.random_data.len(), 10);
    }

    #[tokio::test]
    async fn test_delete_on_empty_table() {
        let report = service().execute(CrudFlags::parse("D").unwrap()).await.unwrap();

        assert_eq!(
            report.operations,
            vec![OperationOutcome::Delete {
                success: true,
                affected_rows: 0
            }]
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(OperationOutcome::Update {
            success: true,
            affected_rows: 1,
        })
        .unwrap();

        assert_eq!(json, serde_json::json!({"type": "update", "success": true, "affectedRows": 1}));
    }
}
