//! In-memory request registry.
//!
//! A single `RwLock` guards the whole registry: reads take snapshots,
//! and every transition runs validate-then-commit inside one write
//! section, so concurrent decisions on the same request serialize and
//! the loser sees the already-terminal state. No I/O happens under the
//! lock.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use terralia_core::error::{TerraliaError, TerraliaResult};
use terralia_core::models::request::{
    CreatePermissionRequest, PermissionRequest, RequestStatus,
};
use terralia_core::repository::{RequestRepository, TransitionOutcome};

struct Inner {
    requests: HashMap<Uuid, PermissionRequest>,
    /// Submission order, so list queries are stable.
    order: Vec<Uuid>,
}

/// In-memory implementation of the request registry.
#[derive(Clone)]
pub struct MemoryRequestRepository {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryRequestRepository {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                requests: HashMap::new(),
                order: Vec::new(),
            })),
        }
    }
}

impl Default for MemoryRequestRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: Uuid) -> TerraliaError {
    TerraliaError::NotFound {
        entity: "permission_request".into(),
        id: id.to_string(),
    }
}

impl RequestRepository for MemoryRequestRepository {
    async fn insert(&self, input: CreatePermissionRequest) -> TerraliaResult<PermissionRequest> {
        let id = Uuid::new_v4();

        // Document attachment is what moves a submission into review.
        let status = if input.documents.is_empty() {
            RequestStatus::Pending
        } else {
            RequestStatus::InReview
        };

        let request = PermissionRequest {
            id,
            terrace_name: input.terrace_name,
            owner: input.owner,
            submission_date: input.submission_date,
            status,
            documents: input.documents,
            rejection_comment: None,
            decided_at: None,
        };

        let mut inner = self.inner.write().await;
        inner.requests.insert(id, request.clone());
        inner.order.push(id);

        info!(
            request_id = %id,
            terrace = %request.terrace_name,
            status = ?request.status,
            "Registered permission request"
        );

        Ok(request)
    }

    async fn get_by_id(&self, id: Uuid) -> TerraliaResult<PermissionRequest> {
        let inner = self.inner.read().await;
        inner.requests.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    async fn list_by_status(
        &self,
        status: RequestStatus,
    ) -> TerraliaResult<Vec<PermissionRequest>> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.requests.get(id))
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }

    async fn list(&self) -> TerraliaResult<Vec<PermissionRequest>> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.requests.get(id))
            .cloned()
            .collect())
    }

    async fn apply_transition(
        &self,
        id: Uuid,
        new_status: RequestStatus,
        comment: Option<String>,
    ) -> TerraliaResult<TransitionOutcome> {
        let mut inner = self.inner.write().await;
        let request = inner.requests.get_mut(&id).ok_or_else(|| not_found(id))?;

        // Idempotent re-decision: the requested terminal state is already
        // committed. Return it unchanged; the original comment stands.
        if request.status.is_terminal() && request.status == new_status {
            debug!(request_id = %id, status = ?new_status, "Transition absorbed (already committed)");
            return Ok(TransitionOutcome {
                request: request.clone(),
                newly_applied: false,
            });
        }

        if !request.status.can_transition_to(new_status) {
            return Err(TerraliaError::InvalidTransition {
                id: id.to_string(),
                from: request.status,
                to: new_status,
            });
        }

        // Validate before touching anything, so a failure leaves the
        // request exactly as it was.
        let rejection_comment = if new_status == RequestStatus::Rejected {
            match comment.as_deref().map(str::trim) {
                Some(trimmed) if !trimmed.is_empty() => Some(trimmed.to_string()),
                _ => {
                    return Err(TerraliaError::Validation {
                        field: "comment".into(),
                        message: "comment required".into(),
                    });
                }
            }
        } else {
            None
        };

        request.status = new_status;
        request.rejection_comment = rejection_comment;
        request.decided_at = new_status.is_terminal().then(Utc::now);

        info!(request_id = %id, status = ?new_status, "Transition committed");

        Ok(TransitionOutcome {
            request: request.clone(),
            newly_applied: true,
        })
    }
}
