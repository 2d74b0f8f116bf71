use async_trait::async_trait;

use super::domain::LogRecord;
use crate::errors::RepositoryError;

/// Append-only storage for log records.
#[async_trait]
pub trait LogRepository: Send + Sync {
    async fn store(&self, record: &LogRecord) -> Result<(), RepositoryError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    use sea_orm::DbErr;

    #[derive(Default)]
    pub struct MockLogRepository {
        records: Mutex<Vec<LogRecord>>,
        fail_after: Mutex<Option<usize>>,
    }

    impl MockLogRepository {
        /// Accept `n` records, then fail every following store.
        pub fn fail_after(n: usize) -> Self {
            Self { fail_after: Mutex::new(Some(n)), ..Self::default() }
        }

        pub fn records(&self) -> Vec<LogRecord> { self.records.lock().unwrap().clone() }

        pub fn errors(&self) -> Vec<String> {
            self.records.lock().unwrap().iter().map(|r| r.error.clone()).collect()
        }
    }

    #[async_trait]
    impl LogRepository for MockLogRepository {
        async fn store(&self, record: &LogRecord) -> Result<(), RepositoryError> {
            let mut records = self.records.lock().unwrap();
            if let Some(limit) = *self.fail_after.lock().unwrap() {
                if records.len() >= limit {
                    return Err(RepositoryError::Storage(DbErr::Custom("log store unavailable".into())));
                }
            }
            records.push(record.clone());
            Ok(())
        }
    }
}
