//! Review error types.

use terralia_core::error::TerraliaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("comment required")]
    CommentRequired,

    #[error("comment exceeds {max} characters")]
    CommentTooLong { max: usize },
}

impl From<ReviewError> for TerraliaError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::CommentRequired | ReviewError::CommentTooLong { .. } => {
                TerraliaError::Validation {
                    field: "comment".into(),
                    message: err.to_string(),
                }
            }
        }
    }
}
