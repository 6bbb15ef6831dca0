//! Record repository trait

use async_trait::async_trait;

use super::Record;
use crate::domain::DomainError;

/// Repository trait for the simulated record table
#[async_trait]
pub trait RecordRepository: Send + Sync + std::fmt::Debug {
    /// Insert a row and return it with its assigned id
    async fn insert(&self, data: &str) -> Result<Record, DomainError>;

    /// All rows ordered by id
    async fn list(&self) -> Result<Vec<Record>, DomainError>;

    /// Overwrite the data of one randomly chosen row, returns affected rows
    async fn update_random(&self, data: &str) -> Result<u64, DomainError>;

    /// Remove one randomly chosen row, returns affected rows
    async fn delete_random(&self) -> Result<u64, DomainError>;
}

/// In-memory implementation of RecordRepository
pub mod in_memory {
    use super::*;
    use rand::seq::IteratorRandom;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Debug)]
    struct Table {
        next_id: i64,
        rows: BTreeMap<i64, Record>,
    }

    impl Default for Table {
        fn default() -> Self {
            Self {
                next_id: 1,
                rows: BTreeMap::new(),
            }
        }
    }

    impl Table {
        fn random_id(&self) -> Option<i64> {
            self.rows.keys().copied().choose(&mut rand::thread_rng())
        }
    }

    /// Process-local table shared by every request of one instance
    #[derive(Debug, Default)]
    pub struct InMemoryRecordRepository {
        table: Mutex<Table>,
    }

    impl InMemoryRecordRepository {
        pub fn new() -> Self {
            Self::default()
        }

        fn table(&self) -> Result<MutexGuard<'_, Table>, DomainError> {
            self.table
                .lock()
                .map_err(|e| DomainError::storage(format!("record table lock poisoned: {}", e)))
        }
    }

    #[async_trait]
    impl RecordRepository for InMemoryRecordRepository {
        async fn insert(&self, data: &str) -> Result<Record, DomainError> {
            let mut table = self.table()?;
            let record = Record::new(table.next_id, data);

            table.next_id += 1;
            table.rows.insert(record.id, record.clone());
            Ok(record)
        }

        async fn list(&self) -> Result<Vec<Record>, DomainError> {
            Ok(self.table()?.rows.values().cloned().collect())
        }

        async fn update_random(&self, data: &str) -> Result<u64, DomainError> {
            let mut table = self.table()?;

            let Some(id) = table.random_id() else {
                return Ok(0);
            };

            match table.rows.get_mut(&id) {
                Some(row) => {
                    row.data = data.to_string();
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete_random(&self) -> Result<u64, DomainError> {
            let mut table = self.table()?;

            Ok(table
                .random_id()
                .and_then(|id| table.rows.remove(&id))
                .map_or(0, |_| 1))
        }
    }

}

pub use in_memory::InMemoryRecordRepository;
