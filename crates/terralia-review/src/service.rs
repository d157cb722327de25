//! Review service — approve/reject orchestration.

use tracing::{info, warn};
use uuid::Uuid;

use terralia_core::error::TerraliaResult;
use terralia_core::models::request::{PermissionRequest, RequestStatus};
use terralia_core::repository::RequestRepository;

use crate::config::ReviewConfig;
use crate::error::ReviewError;
use crate::event::{ReviewEvent, ReviewEventBus};

/// Review service.
///
/// Generic over the repository implementation so that the decision
/// layer has no dependency on the store crate. All registry mutation
/// goes through here; the service itself performs no I/O and never
/// retries — a repeated decision relies on the registry's idempotent
/// terminal-state semantics.
pub struct ReviewService<R: RequestRepository> {
    repo: R,
    config: ReviewConfig,
    events: ReviewEventBus,
}

impl<R: RequestRepository> ReviewService<R> {
    pub fn new(repo: R, config: ReviewConfig) -> Self {
        let events = ReviewEventBus::with_capacity(config.event_capacity);
        Self {
            repo,
            config,
            events,
        }
    }

    /// Subscribe to committed decisions (notification collaborator).
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<ReviewEvent> {
        self.events.subscribe()
    }

    /// Approve a request under review.
    pub async fn approve(&self, id: Uuid) -> TerraliaResult<PermissionRequest> {
        let outcome = self
            .repo
            .apply_transition(id, RequestStatus::Approved, None)
            .await?;

        if outcome.newly_applied {
            let summary = outcome.request.document_summary();
            if !summary.all_approved() {
                // Admin judgement overrides the ledger; worth a trace.
                warn!(
                    request_id = %id,
                    pending = summary.pending,
                    rejected = summary.rejected,
                    "Approved with unverified documents"
                );
            }
            info!(request_id = %id, "Request approved");
            self.events.emit(ReviewEvent::RequestApproved { request_id: id });
        }

        Ok(outcome.request)
    }

    /// Reject a request under review. The comment is mandatory and is
    /// stored trimmed.
    pub async fn reject(&self, id: Uuid, comment: &str) -> TerraliaResult<PermissionRequest> {
        // 1. Validate the comment before going anywhere near the registry.
        let trimmed = comment.trim();
        if trimmed.is_empty() {
            return Err(ReviewError::CommentRequired.into());
        }
        if trimmed.chars().count() > self.config.max_comment_length {
            return Err(ReviewError::CommentTooLong {
                max: self.config.max_comment_length,
            }
            .into());
        }

        // 2. Commit the transition.
        let outcome = self
            .repo
            .apply_transition(id, RequestStatus::Rejected, Some(trimmed.to_string()))
            .await?;

        // 3. Announce the decision exactly once.
        if outcome.newly_applied {
            info!(request_id = %id, "Request rejected");
            self.events.emit(ReviewEvent::RequestRejected {
                request_id: id,
                comment: trimmed.to_string(),
            });
        }

        Ok(outcome.request)
    }

    /// Current view of a request, for the presentation layer.
    pub async fn get(&self, id: Uuid) -> TerraliaResult<PermissionRequest> {
        self.repo.get_by_id(id).await
    }

    /// Requests in a given state, in submission order.
    pub async fn list_by_status(
        &self,
        status: RequestStatus,
    ) -> TerraliaResult<Vec<PermissionRequest>> {
        self.repo.list_by_status(status).await
    }
}
