use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use configs::AppConfig;
use service::article::repo::SeaOrmArticleRepository;
use service::article::{ArticleRepository, ArticleService};
use service::log::repo::SeaOrmLogRepository;
use service::log::{LogRepository, LogService};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tracing::{error, info};

use crate::{ArticleServer, LogServer};

/// Connect to the store, wire repositories and services, and serve both gRPC
/// services on the configured address until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_create_schema {
        models::schema::ensure_schema(&db).await?;
        info!("database schema ensured");
    }

    let articles = Arc::new(ArticleService::new(Arc::new(SeaOrmArticleRepository::new(db.clone()))));
    let logs = Arc::new(LogService::new(Arc::new(SeaOrmLogRepository::new(db))));

    let addr = cfg.server.socket_addr()?;
    serve(addr, ArticleServer::new(articles), LogServer::new(logs), shutdown).await
}

/// Bind `addr` and serve the two adapters on it.
pub async fn serve<A, L, F>(
    addr: SocketAddr,
    articles: ArticleServer<A>,
    logs: LogServer<L>,
    shutdown: F,
) -> anyhow::Result<()>
where
    A: ArticleRepository + 'static,
    L: LogRepository + 'static,
    F: Future<Output = ()> + Send,
{
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, articles, logs, shutdown).await
}

/// Serve the two adapters on an already bound listener.
pub async fn serve_on<A, L, F>(
    listener: TcpListener,
    articles: ArticleServer<A>,
    logs: LogServer<L>,
    shutdown: F,
) -> anyhow::Result<()>
where
    A: ArticleRepository + 'static,
    L: LogRepository + 'static,
    F: Future<Output = ()> + Send,
{
    info!(addr = %listener.local_addr()?, "running grpc server");
    let reflection = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(crate::proto::FILE_DESCRIPTOR_SET)
        .build_v1()?;
    tonic::transport::Server::builder()
        .add_service(articles.into_service())
        .add_service(logs.into_service())
        .add_service(reflection)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;
    info!("grpc server stopped");
    Ok(())
}

/// Resolve once `signal` fires. If the signal handler could not be installed
/// the error is logged and this never resolves, so the server keeps running.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        error!(error = %e, "failed to listen for shutdown signal; running until killed");
        std::future::pending::<()>().await;
    }
}
