//! Terralia Server — application entry point.
//!
//! Wires the in-memory registry, the review service, and the reporter,
//! and relays committed decisions to the log until a transport adapter
//! (REST admin API) lands on top.

use tracing_subscriber::EnvFilter;

use terralia_review::{ReviewConfig, ReviewEvent, ReviewReporter, ReviewService};
use terralia_store::MemoryRequestRepository;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("terralia=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("Starting Terralia review server...");

    let registry = MemoryRequestRepository::new();
    let review = ReviewService::new(registry.clone(), ReviewConfig::default());
    let reporter = ReviewReporter::new(registry);

    // Relay committed decisions out-of-band (notification collaborator).
    let mut decisions = review.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = decisions.recv().await {
            match event {
                ReviewEvent::RequestApproved { request_id } => {
                    tracing::info!(request_id = %request_id, "Decision: approved");
                }
                ReviewEvent::RequestRejected {
                    request_id,
                    comment,
                } => {
                    tracing::info!(request_id = %request_id, comment = %comment, "Decision: rejected");
                }
            }
        }
    });

    match reporter.counts().await {
        Ok(counts) => tracing::info!(
            total = counts.total,
            in_review = counts.in_review,
            "Registry ready"
        ),
        Err(e) => tracing::error!(error = %e, "Registry scan failed"),
    }

    // TODO: mount the REST admin API (approve/reject commands,
    // list/counts queries) once the transport layer is chosen.

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }

    tracing::info!("Terralia review server stopped.");
}
