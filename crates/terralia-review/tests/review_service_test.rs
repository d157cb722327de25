//! Integration tests for the review service and reporter against the
//! in-memory registry.

use chrono::Utc;
use uuid::Uuid;

use terralia_core::error::TerraliaError;
use terralia_core::models::document::{Document, DocumentStatus};
use terralia_core::models::request::{CreatePermissionRequest, RequestStatus};
use terralia_core::repository::RequestRepository;
use terralia_review::{ReviewConfig, ReviewEvent, ReviewReporter, ReviewService, StatusCounts};
use terralia_store::MemoryRequestRepository;

fn doc(kind: &str, status: DocumentStatus) -> Document {
    Document {
        kind: kind.into(),
        reference: format!("s3://docs/{kind}"),
        status,
    }
}

/// Spin up the registry + service and register one in-review request.
async fn setup(
    documents: Vec<Document>,
) -> (MemoryRequestRepository, ReviewService<MemoryRequestRepository>, Uuid) {
    let repo = MemoryRequestRepository::new();
    let request = repo
        .insert(CreatePermissionRequest {
            terrace_name: "Terraza del Sol".into(),
            owner: "Café Central".into(),
            submission_date: Utc::now(),
            documents,
        })
        .await
        .unwrap();
    assert_eq!(request.status, RequestStatus::InReview);

    let svc = ReviewService::new(repo.clone(), ReviewConfig::default());
    (repo, svc, request.id)
}

fn default_docs() -> Vec<Document> {
    vec![doc("license", DocumentStatus::Approved)]
}

// -----------------------------------------------------------------------
// Rejection scenario (request R1)
// -----------------------------------------------------------------------

#[tokio::test]
async fn reject_with_partially_verified_documents() {
    let docs = vec![
        doc("license", DocumentStatus::Pending),
        doc("zoning", DocumentStatus::Approved),
        doc("id", DocumentStatus::Approved),
    ];
    let (_repo, svc, r1) = setup(docs).await;

    // Empty comment is refused before the registry is touched.
    let err = svc.reject(r1, "").await.unwrap_err();
    assert!(
        matches!(err, TerraliaError::Validation { ref field, .. } if field == "comment"),
        "expected Validation on comment, got {err:?}"
    );
    assert_eq!(svc.get(r1).await.unwrap().status, RequestStatus::InReview);

    let rejected = svc.reject(r1, "ID photo unreadable").await.unwrap();
    assert_eq!(rejected.status, RequestStatus::Rejected);
    assert_eq!(
        rejected.rejection_comment.as_deref(),
        Some("ID photo unreadable")
    );
}

#[tokio::test]
async fn reject_with_whitespace_comment_fails() {
    let (_repo, svc, id) = setup(default_docs()).await;

    let err = svc.reject(id, "   ").await.unwrap_err();
    assert!(matches!(err, TerraliaError::Validation { .. }));
    assert_eq!(svc.get(id).await.unwrap().status, RequestStatus::InReview);
}

#[tokio::test]
async fn reject_with_oversized_comment_fails() {
    let (_repo, svc, id) = setup(default_docs()).await;

    let err = svc.reject(id, &"x".repeat(1001)).await.unwrap_err();
    match err {
        TerraliaError::Validation { field, message } => {
            assert_eq!(field, "comment");
            assert!(message.contains("1000"), "unexpected message: {message}");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

// -----------------------------------------------------------------------
// Approval scenario (request R2)
// -----------------------------------------------------------------------

#[tokio::test]
async fn approve_then_reject_fails_invalid_transition() {
    let (_repo, svc, r2) = setup(default_docs()).await;

    let approved = svc.approve(r2).await.unwrap();
    assert_eq!(approved.status, RequestStatus::Approved);

    let err = svc.reject(r2, "late").await.unwrap_err();
    assert!(matches!(err, TerraliaError::InvalidTransition { .. }));

    let stored = svc.get(r2).await.unwrap();
    assert_eq!(stored.status, RequestStatus::Approved);
    assert_eq!(stored.rejection_comment, None);
}

#[tokio::test]
async fn repeated_approve_returns_same_committed_state() {
    let (_repo, svc, id) = setup(default_docs()).await;

    let first = svc.approve(id).await.unwrap();
    let second = svc.approve(id).await.unwrap();
    assert_eq!(first.status, RequestStatus::Approved);
    assert_eq!(second.status, RequestStatus::Approved);
    assert_eq!(second.decided_at, first.decided_at);
}

#[tokio::test]
async fn decisions_on_unknown_request_fail_not_found() {
    let (_repo, svc, _id) = setup(default_docs()).await;

    let err = svc.approve(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, TerraliaError::NotFound { .. }));

    let err = svc.reject(Uuid::new_v4(), "no such venue").await.unwrap_err();
    assert!(matches!(err, TerraliaError::NotFound { .. }));
}

// -----------------------------------------------------------------------
// Decision events
// -----------------------------------------------------------------------

#[tokio::test]
async fn committed_decisions_are_announced_exactly_once() {
    let (_repo, svc, id) = setup(default_docs()).await;
    let mut rx = svc.subscribe();

    svc.approve(id).await.unwrap();
    // Idempotent re-decision must not produce a second event.
    svc.approve(id).await.unwrap();

    let event = rx.recv().await.unwrap();
    assert!(matches!(event, ReviewEvent::RequestApproved { request_id } if request_id == id));
    assert!(rx.try_recv().is_err(), "no second event expected");
}

#[tokio::test]
async fn rejection_event_carries_the_comment() {
    let (_repo, svc, id) = setup(default_docs()).await;
    let mut rx = svc.subscribe();

    svc.reject(id, "  zoning permit expired ").await.unwrap();

    match rx.recv().await.unwrap() {
        ReviewEvent::RequestRejected {
            request_id,
            comment,
        } => {
            assert_eq!(request_id, id);
            assert_eq!(comment, "zoning permit expired");
        }
        other => panic!("expected RequestRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_decisions_emit_nothing() {
    let (_repo, svc, id) = setup(default_docs()).await;
    let mut rx = svc.subscribe();

    svc.reject(id, "").await.unwrap_err();
    svc.approve(Uuid::new_v4()).await.unwrap_err();

    assert!(rx.try_recv().is_err());
}

// -----------------------------------------------------------------------
// Aggregate reporting
// -----------------------------------------------------------------------

#[tokio::test]
async fn counts_on_empty_registry_are_zero() {
    let repo = MemoryRequestRepository::new();
    let reporter = ReviewReporter::new(repo);

    assert_eq!(reporter.counts().await.unwrap(), StatusCounts::default());
}

#[tokio::test]
async fn counts_reconcile_after_every_decision() {
    let repo = MemoryRequestRepository::new();
    let svc = ReviewService::new(repo.clone(), ReviewConfig::default());
    let reporter = ReviewReporter::new(repo.clone());

    let mut ids = Vec::new();
    for name in ["Alpha", "Beta", "Gamma", "Delta"] {
        let request = repo
            .insert(CreatePermissionRequest {
                terrace_name: name.into(),
                owner: "Café Central".into(),
                submission_date: Utc::now(),
                documents: default_docs(),
            })
            .await
            .unwrap();
        ids.push(request.id);
    }

    svc.approve(ids[0]).await.unwrap();
    svc.reject(ids[1], "incomplete paperwork").await.unwrap();
    svc.approve(ids[2]).await.unwrap();

    let counts = reporter.counts().await.unwrap();
    assert_eq!(
        counts,
        StatusCounts {
            total: 4,
            pending: 0,
            in_review: 1,
            approved: 2,
            rejected: 1,
        }
    );
    assert_eq!(
        counts.in_review + counts.approved + counts.rejected + counts.pending,
        counts.total
    );
}

#[tokio::test]
async fn counts_reflect_transitions_immediately() {
    let (repo, svc, id) = setup(default_docs()).await;
    let reporter = ReviewReporter::new(repo);

    assert_eq!(reporter.counts().await.unwrap().in_review, 1);
    svc.approve(id).await.unwrap();

    let counts = reporter.counts().await.unwrap();
    assert_eq!(counts.in_review, 0);
    assert_eq!(counts.approved, 1);
}
