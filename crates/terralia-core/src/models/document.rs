//! Supporting-document model and the per-request status ledger.
//!
//! Document statuses are supplied by the submission collaborator; this
//! subsystem reads them as given facts and never re-verifies content.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

/// A supporting document attached to a permission request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Label for the required document kind (e.g., `operating-license`).
    pub kind: String,
    /// Opaque locator to the artifact. Never interpreted by this core.
    pub reference: String,
    pub status: DocumentStatus,
}

/// Verification-status counts over one request's document sequence.
///
/// Pure aggregation — used by the admin display today, and the natural
/// input for any future auto-decision rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocumentSummary {
    pub approved: usize,
    pub rejected: usize,
    pub pending: usize,
    pub total: usize,
}

impl DocumentSummary {
    /// Summarize a document sequence. Total over any input, no errors.
    pub fn of(documents: &[Document]) -> Self {
        let mut summary = Self {
            total: documents.len(),
            ..Self::default()
        };
        for doc in documents {
            match doc.status {
                DocumentStatus::Approved => summary.approved += 1,
                DocumentStatus::Rejected => summary.rejected += 1,
                DocumentStatus::Pending => summary.pending += 1,
            }
        }
        summary
    }

    /// Every document verified and approved (vacuously false when empty).
    pub fn all_approved(&self) -> bool {
        self.total > 0 && self.approved == self.total
    }

    /// At least one document failed verification.
    pub fn any_rejected(&self) -> bool {
        self.rejected > 0
    }
}
