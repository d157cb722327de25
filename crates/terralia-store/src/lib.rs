//! Terralia Store — in-memory implementation of the request registry.
//!
//! Persistence technology is out of scope for the review core; the
//! registry is a process-local mapping with a defined locking
//! discipline. Swapping in a persistent backend means implementing
//! `terralia_core::repository::RequestRepository` elsewhere.

mod memory;

pub use memory::MemoryRequestRepository;
