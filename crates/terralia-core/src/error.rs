//! Error types for the Terralia system.

use thiserror::Error;

use crate::models::request::RequestStatus;

#[derive(Debug, Error)]
pub enum TerraliaError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Invalid transition for request {id}: {from:?} -> {to:?}")]
    InvalidTransition {
        id: String,
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TerraliaResult<T> = Result<T, TerraliaError>;
