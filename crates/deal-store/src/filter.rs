//! Filter criteria for `PipelineStore::apply_filter`.

use deal_core::entities::Venture;
use deal_core::enums::{DealType, Stage};
use serde::{Deserialize, Serialize};

/// Conjunctive venture filter. Absent options impose no constraint.
///
/// `industry` and `market` match the whole value, ignoring ASCII case and
/// surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub stage: Option<Stage>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub deal_type: Option<DealType>,
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    #[must_use]
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    #[must_use]
    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    #[must_use]
    pub fn deal_type(mut self, deal_type: DealType) -> Self {
        self.deal_type = Some(deal_type);
        self
    }

    /// True when no option is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stage.is_none()
            && self.industry.is_none()
            && self.market.is_none()
            && self.deal_type.is_none()
    }

    #[must_use]
    pub fn matches(&self, venture: &Venture) -> bool {
        self.stage.is_none_or(|stage| venture.stage == stage)
            && self.deal_type.is_none_or(|kind| venture.deal_type == kind)
            && text_matches(self.industry.as_deref(), &venture.industry)
            && text_matches(self.market.as_deref(), &venture.market)
    }
}

fn text_matches(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|wanted| wanted.trim().eq_ignore_ascii_case(actual.trim()))
}
