//! Append-only error log sink.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use domain::LogRecord;
pub use repository::LogRepository;
pub use service::LogService;
