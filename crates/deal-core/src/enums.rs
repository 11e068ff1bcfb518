//! Pipeline stages, deal attributes, and audit actions for Dealflow.
//!
//! All enums use `kebab-case` serialization via `#[serde(rename_all = "kebab-case")]`.
//! `Stage` carries the pipeline state machine: `allowed_next_states()` is the
//! single source of truth for which transitions the store accepts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Pipeline stage of a venture.
///
/// ```text
/// screening → due-diligence → deal-terms → deal-closing → closed-deals
///     ↓             ↓              ↓             ↓
///     └─────────────┴──────────────┴─────────────┴──────→ passed-deals
/// ```
///
/// `closed-deals` and `passed-deals` are terminal. Variant order is pipeline
/// order, so `Ord` sorts stages left to right on a board.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Entry stage for every new venture.
    #[default]
    Screening,
    DueDiligence,
    DealTerms,
    DealClosing,
    ClosedDeals,
    PassedDeals,
}

impl Stage {
    /// Every stage in board order.
    pub const ALL: [Self; 6] = [
        Self::Screening,
        Self::DueDiligence,
        Self::DealTerms,
        Self::DealClosing,
        Self::ClosedDeals,
        Self::PassedDeals,
    ];

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Screening => &[Self::DueDiligence, Self::PassedDeals],
            Self::DueDiligence => &[Self::DealTerms, Self::PassedDeals],
            Self::DealTerms => &[Self::DealClosing, Self::PassedDeals],
            Self::DealClosing => &[Self::ClosedDeals, Self::PassedDeals],
            Self::ClosedDeals | Self::PassedDeals => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// The forward ("Proceed") stage, or `None` for terminal stages.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Screening => Some(Self::DueDiligence),
            Self::DueDiligence => Some(Self::DealTerms),
            Self::DealTerms => Some(Self::DealClosing),
            Self::DealClosing => Some(Self::ClosedDeals),
            Self::ClosedDeals | Self::PassedDeals => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::ClosedDeals | Self::PassedDeals)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Screening => "screening",
            Self::DueDiligence => "due-diligence",
            Self::DealTerms => "deal-terms",
            Self::DealClosing => "deal-closing",
            Self::ClosedDeals => "closed-deals",
            Self::PassedDeals => "passed-deals",
        }
    }

    /// Column heading used on the pipeline board.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Screening => "Screening",
            Self::DueDiligence => "Due Diligence",
            Self::DealTerms => "Deal Terms",
            Self::DealClosing => "Deal Closing",
            Self::ClosedDeals => "Closed Deals",
            Self::PassedDeals => "Passed Deals",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Analyst-assigned priority of a venture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DealType
// ---------------------------------------------------------------------------

/// Whether a deal is new issuance or an existing shareholder sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DealType {
    Primary,
    Secondary,
}

impl DealType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for DealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FundingStage
// ---------------------------------------------------------------------------

/// Company funding stage (pre-seed through Series B).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum FundingStage {
    PreSeed,
    Seed,
    SeriesA,
    SeriesB,
}

impl FundingStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreSeed => "pre-seed",
            Self::Seed => "seed",
            Self::SeriesA => "series-a",
            Self::SeriesB => "series-b",
        }
    }
}

impl fmt::Display for FundingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VentureSource
// ---------------------------------------------------------------------------

/// Where an opportunity entered the pipeline from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum VentureSource {
    /// Direct interest expressed through the marketplace.
    #[default]
    Marketplace,
    /// Promoted from an investor's saved opportunities.
    SavedOpportunity,
}

impl VentureSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marketplace => "marketplace",
            Self::SavedOpportunity => "saved-opportunity",
        }
    }
}

impl fmt::Display for VentureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Type of action recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AuditAction {
    /// Venture entered the pipeline through `create_venture`.
    Created,
    /// Venture was bulk-loaded from seed data.
    Seeded,
    StageChanged,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Seeded => "seeded",
            Self::StageChanged => "stage-changed",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
