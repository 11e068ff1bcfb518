use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{FundingRound, PerformanceMetric};
use crate::enums::{DealType, FundingStage, Priority, Stage, VentureSource};
use crate::errors::CoreError;
use crate::ids::VentureId;
use crate::money::Money;

/// An investment opportunity tracked through the deal pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Venture {
    pub id: VentureId,
    pub name: String,
    pub description: String,
    pub long_description: Option<String>,
    pub industry: String,
    pub market: String,
    pub logo: Option<String>,
    pub deal_size: Money,
    pub valuation: Money,
    pub funding_stage: FundingStage,
    pub deal_type: DealType,
    pub stage: Stage,
    pub priority: Priority,
    pub days_in_stage: u32,
    pub stage_entered_at: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
    /// Bumped on every mutation; used for compare-and-swap transitions.
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub source: VentureSource,
    #[serde(default)]
    pub funding_rounds: Vec<FundingRound>,
    #[serde(default)]
    pub metrics: Vec<PerformanceMetric>,
}

impl Venture {
    /// Check required descriptive fields.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first blank field.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("name", &self.name),
            ("industry", &self.industry),
            ("market", &self.market),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "venture {}: {field} must not be empty",
                    self.id
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Move this venture into `to`, resetting the stage clock.
    ///
    /// Returns the stage the venture left.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` if `to` is not adjacent to the
    /// current stage. The venture is left untouched in that case.
    pub fn enter_stage(&mut self, to: Stage, at: DateTime<Utc>) -> Result<Stage, CoreError> {
        let from = self.stage;
        if !from.can_transition_to(to) {
            return Err(CoreError::InvalidTransition {
                entity_type: "venture".to_string(),
                id: self.id.to_string(),
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.stage = to;
        self.days_in_stage = 0;
        self.stage_entered_at = at;
        self.last_update = at;
        self.version += 1;
        Ok(from)
    }

    /// Whole days spent in the current stage as of `now`. Never negative.
    #[must_use]
    pub fn elapsed_days(&self, now: DateTime<Utc>) -> u32 {
        let days = (now - self.stage_entered_at).num_days().max(0);
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Recompute `days_in_stage` for `now`. Returns whether it changed.
    pub fn refresh_days(&mut self, now: DateTime<Utc>) -> bool {
        let days = self.elapsed_days(now);
        if days == self.days_in_stage {
            return false;
        }
        self.days_in_stage = days;
        true
    }

    /// A non-terminal venture idle in its stage for more than `threshold_days`.
    #[must_use]
    pub const fn is_stale(&self, threshold_days: u32) -> bool {
        !self.is_terminal() && self.days_in_stage > threshold_days
    }

    /// Relative label for `last_update`, as shown on pipeline cards.
    #[must_use]
    pub fn last_update_label(&self, now: DateTime<Utc>) -> String {
        let elapsed = now - self.last_update;
        let days = elapsed.num_days();
        if days <= 0 {
            let hours = elapsed.num_hours();
            return match hours {
                h if h <= 0 => "just now".to_string(),
                1 => "1 hour ago".to_string(),
                h => format!("{h} hours ago"),
            };
        }
        match days {
            1 => "1 day ago".to_string(),
            d if d < 7 => format!("{d} days ago"),
            d if d < 14 => "1 week ago".to_string(),
            d if d < 30 => format!("{} weeks ago", d / 7),
            d if d < 60 => "1 month ago".to_string(),
            d => format!("{} months ago", d / 30),
        }
    }
}
