//! Decision events for out-of-band collaborators.
//!
//! Delivery is fire-and-forget: the notification listener gets at least
//! the event kind and the affected id, and the core never waits on it.

use tokio::sync::broadcast;
use tracing::trace;
use uuid::Uuid;

/// A committed review decision.
#[derive(Debug, Clone)]
pub enum ReviewEvent {
    RequestApproved {
        request_id: Uuid,
    },
    RequestRejected {
        request_id: Uuid,
        comment: String,
    },
}

impl ReviewEvent {
    pub fn request_id(&self) -> Uuid {
        match self {
            Self::RequestApproved { request_id } | Self::RequestRejected { request_id, .. } => {
                *request_id
            }
        }
    }
}

/// Broadcast bus for committed decisions.
pub struct ReviewEventBus {
    sender: broadcast::Sender<ReviewEvent>,
}

impl ReviewEventBus {
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Emit an event to all subscribers.
    pub fn emit(&self, event: ReviewEvent) {
        trace!(event = ?event, "Emitting review event");
        // Ignore send errors (no subscribers).
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReviewEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
