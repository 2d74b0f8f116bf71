//! gRPC adapter for the log sink and its client-streaming ingestion loop.
//!
//! Per stream, one spawned producer task pulls messages, stores each one
//! before reading the next, and reports a single terminal [`IngestOutcome`]
//! over a oneshot channel. The RPC future awaits that outcome and turns it
//! into the response:
//!
//! ```text
//! Open -> Receiving -> Completed        -> Ok(Empty)
//!                   -> Receive(status)  -> Err(status)
//!                   -> Store(error)     -> Err(internal)
//! ```
//!
//! The oneshot send never blocks. While waiting for the next message the
//! producer also watches `Sender::closed`, so it stops as soon as the RPC
//! future is dropped (client gone, call cancelled).

use std::sync::Arc;

use futures_util::{Stream, StreamExt};
use service::log::{LogRecord, LogRepository, LogService};
use service::RepositoryError;
use tokio::sync::oneshot;
use tonic::{Request, Response, Status, Streaming};
use tracing::{debug, error, info, warn};

use crate::errors::INTERNAL_MSG;
use crate::proto::log as proto;
use crate::proto::log::log_service_server::{LogService as LogRpc, LogServiceServer};

/// Terminal result of one ingestion stream.
#[derive(Debug)]
pub enum IngestOutcome {
    /// The client closed the stream cleanly after `stored` messages.
    Completed { stored: u64 },
    /// The transport reported an error while receiving.
    Receive(Status),
    /// Persisting a message failed; the stream was abandoned at that point.
    Store(RepositoryError),
    /// The controlling RPC went away before the stream ended.
    Abandoned,
}

/// Spawn the receive/store loop for `stream` and return the channel its single
/// outcome arrives on.
pub fn spawn_ingest<S, R>(stream: S, service: Arc<LogService<R>>) -> oneshot::Receiver<IngestOutcome>
where
    S: Stream<Item = Result<proto::LogError, Status>> + Send + Unpin + 'static,
    R: LogRepository + 'static,
{
    let (mut tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = ingest(stream, &service, &mut tx).await;
        // Err only when the receiver is gone, which means nobody is waiting.
        let _ = tx.send(outcome);
    });
    rx
}

async fn ingest<S, R>(
    mut stream: S,
    service: &LogService<R>,
    tx: &mut oneshot::Sender<IngestOutcome>,
) -> IngestOutcome
where
    S: Stream<Item = Result<proto::LogError, Status>> + Unpin,
    R: LogRepository,
{
    let mut stored = 0u64;
    loop {
        let next = tokio::select! {
            _ = tx.closed() => return IngestOutcome::Abandoned,
            next = stream.next() => next,
        };
        match next {
            None => return IngestOutcome::Completed { stored },
            Some(Err(status)) => return IngestOutcome::Receive(status),
            Some(Ok(msg)) => {
                let record = LogRecord::new(msg.error);
                if let Err(e) = service.store(&record).await {
                    return IngestOutcome::Store(e);
                }
                stored += 1;
                debug!(stored, "log record stored");
            }
        }
    }
}

/// Map a stream outcome to the RPC result.
pub fn finish(outcome: IngestOutcome) -> Result<Response<proto::Empty>, Status> {
    match outcome {
        IngestOutcome::Completed { stored } => {
            info!(stored, "log stream completed");
            Ok(Response::new(proto::Empty {}))
        }
        IngestOutcome::Receive(status) => {
            warn!(code = ?status.code(), detail = status.message(), "log stream receive failed");
            Err(status)
        }
        IngestOutcome::Store(e) => {
            error!(error = %e, "log stream aborted on store failure");
            Err(Status::internal(INTERNAL_MSG))
        }
        IngestOutcome::Abandoned => Err(Status::internal(INTERNAL_MSG)),
    }
}

/// gRPC implementation of `log.v1.LogService`.
pub struct LogServer<R: LogRepository> {
    service: Arc<LogService<R>>,
}

impl<R: LogRepository + 'static> LogServer<R> {
    pub fn new(service: Arc<LogService<R>>) -> Self {
        Self { service }
    }

    /// Get the tonic service for mounting on a gRPC server.
    pub fn into_service(self) -> LogServiceServer<Self> {
        LogServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl<R: LogRepository + 'static> LogRpc for LogServer<R> {
    async fn store_log(
        &self,
        request: Request<Streaming<proto::LogError>>,
    ) -> Result<Response<proto::Empty>, Status> {
        let rx = spawn_ingest(request.into_inner(), Arc::clone(&self.service));
        match rx.await {
            Ok(outcome) => finish(outcome),
            Err(_) => {
                error!("log ingestion task ended without reporting an outcome");
                Err(Status::internal(INTERNAL_MSG))
            }
        }
    }
}
