//! Terralia Core — domain models, error types, and the repository
//! trait for the terrace permission review workflow.
//!
//! Everything here is storage-agnostic: the registry implementation
//! lives in `terralia-store`, the decision service in `terralia-review`.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{TerraliaError, TerraliaResult};
