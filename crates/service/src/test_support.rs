#![cfg(test)]
use std::io;
use std::sync::{Arc, Mutex};

use configs::DatabaseConfig;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;
use tracing_subscriber::fmt::MakeWriter;

/// Fresh in-memory SQLite store with the schema applied.
///
/// A single pooled connection keeps the in-memory database alive for the
/// lifetime of the returned handle.
pub async fn sqlite_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    models::schema::ensure_schema(&db).await?;
    Ok(db)
}

/// Log sink capturing everything formatted by a test-local subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.contents().matches(needle).count()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer { self.clone() }
}

/// Route events on the current thread into a [`CapturedLogs`] until the guard drops.
///
/// Pair with `#[tokio::test]` (current-thread runtime) so spawned-free async
/// code stays on this thread.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
