use service::RepositoryError;
use tonic::Status;
use tracing::error;

pub const ALREADY_EXISTS_MSG: &str = "article with this title already exists";
pub const NOT_FOUND_MSG: &str = "article not found";
pub const INTERNAL_MSG: &str = "internal server error";

/// Generic internal status; the detail stays in the server log.
pub fn internal(op: &'static str, err: &dyn std::error::Error) -> Status {
    error!(op, error = %err, "request failed");
    Status::internal(INTERNAL_MSG)
}

/// Translate a repository failure into the status returned to the caller.
///
/// Only `AlreadyExists` and `NotFound` are surfaced; anything else becomes an
/// opaque internal error after being logged.
pub fn article_status(op: &'static str, err: RepositoryError) -> Status {
    match err {
        RepositoryError::AlreadyExists => Status::already_exists(ALREADY_EXISTS_MSG),
        RepositoryError::NotFound => Status::not_found(NOT_FOUND_MSG),
        other => internal(op, &other),
    }
}
