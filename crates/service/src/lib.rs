//! Domain layer for the article and log services.
//! - Repository traits define the storage contract and its error vocabulary.
//! - sea-orm adapters implement those traits against the `models` entities.
//! - Services orchestrate repository calls and log every failure once.

pub mod article;
pub mod errors;
pub mod log;
#[cfg(test)]
pub mod test_support;

pub use errors::RepositoryError;
