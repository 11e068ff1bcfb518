//! Stage transition actions.
//!
//! The pipeline's "Proceed" and "Pass" buttons, expressed as values. Action
//! scripts are JSONL files with one `PipelineAction` per line:
//!
//! ```text
//! {"action":"transition","venture":1,"to":"due-diligence"}
//! {"action":"advance","venture":1}
//! {"action":"pass","venture":2,"reason":"valuation too high"}
//! {"action":"refresh-days","now":"2026-04-01T00:00:00Z"}
//! ```

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Stage;
use crate::ids::VentureId;

/// A user-triggered pipeline intent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum PipelineAction {
    /// Move a venture to an explicit stage.
    Transition {
        venture: VentureId,
        to: Stage,
        #[serde(default)]
        reason: Option<String>,
    },
    /// "Proceed": move a venture to its next forward stage.
    Advance { venture: VentureId },
    /// "Pass": move a venture to `passed-deals`.
    Pass {
        venture: VentureId,
        #[serde(default)]
        reason: Option<String>,
    },
    /// Recompute days-in-stage for every venture as of `now`.
    RefreshDays { now: DateTime<Utc> },
}

impl PipelineAction {
    /// The venture this action targets, if any.
    #[must_use]
    pub const fn venture(&self) -> Option<VentureId> {
        match self {
            Self::Transition { venture, .. }
            | Self::Advance { venture }
            | Self::Pass { venture, .. } => Some(*venture),
            Self::RefreshDays { .. } => None,
        }
    }

    /// Short label used in logs and rejection reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Transition { .. } => "transition",
            Self::Advance { .. } => "advance",
            Self::Pass { .. } => "pass",
            Self::RefreshDays { .. } => "refresh-days",
        }
    }
}
