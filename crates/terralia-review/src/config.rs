//! Review configuration.

/// Configuration for the review service.
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Maximum accepted rejection-comment length, in characters after
    /// trimming (default: 1000).
    pub max_comment_length: usize,
    /// Decision-event channel capacity; slow subscribers lag and drop
    /// rather than block decisions (default: 256).
    pub event_capacity: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            max_comment_length: 1000,
            event_capacity: 256,
        }
    }
}
