//! gRPC transport for the article catalog and the log sink.

pub mod article_server;
pub mod errors;
pub mod log_server;
pub mod startup;

/// Generated protobuf types and gRPC service stubs.
pub mod proto {
    /// Encoded descriptors for both packages, served over gRPC reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("m1_article_descriptor");

    pub mod article {
        tonic::include_proto!("article.v1");
    }

    pub mod log {
        tonic::include_proto!("log.v1");
    }
}

pub use article_server::ArticleServer;
pub use log_server::LogServer;
pub use startup::{run, serve, serve_on, shutdown_on};
