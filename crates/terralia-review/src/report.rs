//! Aggregate reporting — read-side projection over the registry.

use serde::Serialize;

use terralia_core::error::TerraliaResult;
use terralia_core::models::request::RequestStatus;
use terralia_core::repository::RequestRepository;

/// Request counts by lifecycle state, for the admin dashboard.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_review: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// Recomputes counts from a fresh registry snapshot on every call — no
/// caching, no replica, so every committed transition is reflected
/// immediately. Cannot drive transitions.
pub struct ReviewReporter<R: RequestRepository> {
    repo: R,
}

impl<R: RequestRepository> ReviewReporter<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn counts(&self) -> TerraliaResult<StatusCounts> {
        let requests = self.repo.list().await?;
        let mut counts = StatusCounts {
            total: requests.len(),
            ..StatusCounts::default()
        };
        for request in &requests {
            match request.status {
                RequestStatus::Pending => counts.pending += 1,
                RequestStatus::InReview => counts.in_review += 1,
                RequestStatus::Approved => counts.approved += 1,
                RequestStatus::Rejected => counts.rejected += 1,
            }
        }
        Ok(counts)
    }
}
