//! Permission-request domain model and its lifecycle state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::document::{Document, DocumentSummary};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    InReview,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// Terminal states accept no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Legal edges of the review state machine:
    /// `Pending -> InReview`, `InReview -> Approved | Rejected`.
    pub fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::InReview)
                | (Self::InReview, Self::Approved)
                | (Self::InReview, Self::Rejected)
        )
    }
}

/// A venue's application for terrace-listing permission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionRequest {
    pub id: Uuid,
    pub terrace_name: String,
    pub owner: String,
    pub submission_date: DateTime<Utc>,
    pub status: RequestStatus,
    /// Membership is fixed at submission; only each document's status
    /// may change, and that happens outside this subsystem.
    pub documents: Vec<Document>,
    /// Present only when `status` is `Rejected`.
    pub rejection_comment: Option<String>,
    /// When the terminal decision was committed.
    pub decided_at: Option<DateTime<Utc>>,
}

impl PermissionRequest {
    /// Ledger view over this request's documents.
    pub fn document_summary(&self) -> DocumentSummary {
        DocumentSummary::of(&self.documents)
    }
}

/// Submission-collaborator input for a new request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePermissionRequest {
    pub terrace_name: String,
    pub owner: String,
    pub submission_date: DateTime<Utc>,
    pub documents: Vec<Document>,
}
