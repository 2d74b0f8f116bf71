use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failures a repository may report. Raw store errors are classified once,
/// in [`RepositoryError::from_db`]; upper layers only forward them.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("already exists")]
    AlreadyExists,
    #[error("not found")]
    NotFound,
    /// Reserved for structural input rejects. No repository raises it yet.
    #[error("validation error: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(#[source] DbErr),
}

impl RepositoryError {
    /// Classify a store failure. Unique-constraint violations become
    /// `AlreadyExists`; everything else is wrapped as `Storage`.
    pub fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => RepositoryError::AlreadyExists,
            _ => RepositoryError::Storage(err),
        }
    }

    /// Stable short name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RepositoryError::AlreadyExists => "already_exists",
            RepositoryError::NotFound => "not_found",
            RepositoryError::Validation(_) => "validation",
            RepositoryError::Storage(_) => "storage",
        }
    }
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self { Self::from_db(err) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_db_errors_stay_opaque() {
        let err = RepositoryError::from_db(DbErr::Custom("connection reset".into()));
        assert!(matches!(err, RepositoryError::Storage(_)));
        assert_eq!(err.kind(), "storage");
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn storage_keeps_its_source() {
        use std::error::Error;
        let err = RepositoryError::from(DbErr::Custom("disk full".into()));
        assert!(err.source().is_some());
    }
}
