//! Article catalog: domain entity, repository contract, sea-orm adapter and service.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use domain::Article;
pub use repository::{ArticleRepository, PAGE_SIZE};
pub use service::ArticleService;
