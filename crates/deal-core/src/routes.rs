//! Named views of the host application.
//!
//! The shell navigates by section id (`"venture-pipeline"`, `"marketplace"`).
//! `Section` is the closed set of those ids; `Section::ALL` doubles as the
//! lookup table, so an unknown id is a validation error rather than a blank
//! screen.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Dashboard,
    Network,
    Marketplace,
    EquityTrading,
    MarketIntelligence,
    VenturePipeline,
    SavedOpportunities,
    Profile,
    Settings,
}

impl Section {
    pub const ALL: [Self; 9] = [
        Self::Dashboard,
        Self::Network,
        Self::Marketplace,
        Self::EquityTrading,
        Self::MarketIntelligence,
        Self::VenturePipeline,
        Self::SavedOpportunities,
        Self::Profile,
        Self::Settings,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Network => "network",
            Self::Marketplace => "marketplace",
            Self::EquityTrading => "equity-trading",
            Self::MarketIntelligence => "market-intelligence",
            Self::VenturePipeline => "venture-pipeline",
            Self::SavedOpportunities => "saved-opportunities",
            Self::Profile => "profile",
            Self::Settings => "settings",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Network => "Network",
            Self::Marketplace => "Expert Marketplace",
            Self::EquityTrading => "Equity Trading",
            Self::MarketIntelligence => "Market Intelligence",
            Self::VenturePipeline => "Venture Pipeline",
            Self::SavedOpportunities => "Saved Opportunities",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }

    /// Resolve a section id. Matching ignores case and treats `_` as `-`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for ids outside the table.
    pub fn from_id(id: &str) -> Result<Self, CoreError> {
        let normalized = id.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == normalized)
            .ok_or_else(|| CoreError::Validation(format!("unknown section '{id}'")))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
