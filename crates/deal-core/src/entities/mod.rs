//! Entity structs for the Dealflow pipeline.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema export.

mod audit;
mod funding;
mod stage_change;
mod venture;

pub use audit::AuditEntry;
pub use funding::{FundingRound, PerformanceMetric};
pub use stage_change::StageChange;
pub use venture::Venture;
