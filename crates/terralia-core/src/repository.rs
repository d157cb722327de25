//! Repository trait for the request registry.
//!
//! All operations are async. The registry is the single shared mutable
//! resource of the review workflow: every status mutation goes through
//! [`RequestRepository::apply_transition`], which implementations must
//! make atomic and serialized per request.

use uuid::Uuid;

use crate::error::TerraliaResult;
use crate::models::request::{CreatePermissionRequest, PermissionRequest, RequestStatus};

/// Result of a transition attempt that committed or was absorbed.
///
/// `newly_applied` is `false` for the idempotent case: the request was
/// already in the requested terminal state and nothing changed. Callers
/// use it to emit decision events exactly once.
#[derive(Debug, Clone)]
pub struct TransitionOutcome {
    pub request: PermissionRequest,
    pub newly_applied: bool,
}

pub trait RequestRepository: Send + Sync {
    /// Register a new submission. The registry assigns the id; a request
    /// with attached documents starts `InReview`, one without starts
    /// `Pending`.
    fn insert(
        &self,
        input: CreatePermissionRequest,
    ) -> impl Future<Output = TerraliaResult<PermissionRequest>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = TerraliaResult<PermissionRequest>> + Send;

    /// Requests currently in `status`, in submission (insertion) order.
    fn list_by_status(
        &self,
        status: RequestStatus,
    ) -> impl Future<Output = TerraliaResult<Vec<PermissionRequest>>> + Send;

    /// Full registry snapshot in submission order.
    fn list(&self) -> impl Future<Output = TerraliaResult<Vec<PermissionRequest>>> + Send;

    /// Apply a status transition.
    ///
    /// Fails with `NotFound` if the id is absent, `InvalidTransition` if
    /// `new_status` is not reachable from the current status, and
    /// `Validation` if `new_status` is `Rejected` without a non-empty
    /// comment. Re-applying the terminal status a request already holds
    /// is a no-op success returning the committed state.
    ///
    /// On success the whole update (status + comment + decision time) is
    /// visible atomically; on error nothing changes.
    fn apply_transition(
        &self,
        id: Uuid,
        new_status: RequestStatus,
        comment: Option<String>,
    ) -> impl Future<Output = TerraliaResult<TransitionOutcome>> + Send;
}
