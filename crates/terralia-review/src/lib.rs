//! Terralia Review — decision processing over the request registry:
//! approve/reject orchestration, decision events, and aggregate
//! reporting for the admin panel.

pub mod config;
pub mod error;
pub mod event;
pub mod report;
pub mod service;

pub use config::ReviewConfig;
pub use error::ReviewError;
pub use event::{ReviewEvent, ReviewEventBus};
pub use report::{ReviewReporter, StatusCounts};
pub use service::ReviewService;
