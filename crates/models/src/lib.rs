//! sea-orm entities and connection helpers for the article store.

pub mod article;
pub mod db;
pub mod log_record;
pub mod schema;
