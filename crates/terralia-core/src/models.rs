//! Domain models for Terralia.
//!
//! These are the core types shared across all crates.

pub mod document;
pub mod request;
