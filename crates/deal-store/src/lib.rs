//! # deal-store
//!
//! In-memory store for the venture deal pipeline.
//!
//! Holds the authoritative venture records, each venture's append-only stage
//! history, and an audit log of every mutation. All mutations go through
//! `PipelineStore` and are validated against the `Stage` state machine from
//! `deal-core`; a rejected mutation leaves the store untouched.
//!
//! Nothing here touches disk except the read-only seed and action-script
//! loaders.

pub mod board;
pub mod error;
pub mod filter;
pub mod inputs;
pub mod repos;
pub mod script;
pub mod seed;
pub mod service;

#[cfg(test)]
mod test_support;

pub use board::{HostEvent, PipelineController, PipelineHost, RecordingHost, board};
pub use error::StoreError;
pub use filter::FilterCriteria;
pub use repos::audit::AuditFilter;
pub use repos::transition::{ActionOutcome, TransitionOptions};
pub use service::PipelineStore;
