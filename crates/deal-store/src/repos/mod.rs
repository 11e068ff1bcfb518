//! Repository modules implementing the pipeline store operations.
//!
//! Each module adds methods to `PipelineStore` via `impl PipelineStore` blocks.

pub mod audit;
pub mod history;
pub mod transition;
pub mod venture;
