use std::sync::Arc;

use tracing::{error, instrument};

use super::domain::LogRecord;
use super::repository::LogRepository;
use crate::errors::RepositoryError;

/// Log service: forwards to the repository and logs failures once.
pub struct LogService<R: LogRepository> {
    repo: Arc<R>,
}

impl<R: LogRepository> LogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip_all)]
    pub async fn store(&self, record: &LogRecord) -> Result<(), RepositoryError> {
        self.repo.store(record).await.inspect_err(|e| {
            error!(op = "store", kind = e.kind(), error = %e, "log repository call failed");
        })
    }
}
