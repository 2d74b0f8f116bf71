use serde::{Deserialize, Serialize};

/// One reported error, stamped when it is received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub error: String,
    /// Unix seconds.
    pub created_at: i64,
}

impl LogRecord {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), created_at: chrono::Utc::now().timestamp() }
    }
}

impl From<models::log_record::Model> for LogRecord {
    fn from(m: models::log_record::Model) -> Self {
        Self { error: m.error, created_at: m.created_at }
    }
}
