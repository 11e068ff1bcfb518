//! New venture builder.

use chrono::{DateTime, Utc};
use deal_core::entities::{FundingRound, PerformanceMetric};
use deal_core::enums::{DealType, FundingStage, Priority, VentureSource};
use deal_core::ids::VentureId;
use deal_core::money::Money;
use serde::Serialize;

/// Everything needed to open a venture in `screening`.
#[derive(Debug, Clone, Serialize)]
pub struct NewVenture {
    /// Explicit id; `None` lets the store assign the next free one.
    pub id: Option<VentureId>,
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
    pub priority: Priority,
    pub source: VentureSource,
    pub funding_rounds: Vec<FundingRound>,
    pub metrics: Vec<PerformanceMetric>,
    /// When the venture entered screening; defaults to now.
    pub entered_at: Option<DateTime<Utc>>,
}

pub struct NewVentureBuilder(NewVenture);

impl NewVentureBuilder {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        industry: impl Into<String>,
        market: impl Into<String>,
    ) -> Self {
        Self(NewVenture {
            id: None,
            name: name.into(),
            description: String::new(),
            long_description: None,
            industry: industry.into(),
            market: market.into(),
            logo: None,
            deal_size: Money::default(),
            valuation: Money::default(),
            funding_stage: FundingStage::Seed,
            deal_type: DealType::Primary,
            priority: Priority::default(),
            source: VentureSource::default(),
            funding_rounds: Vec::new(),
            metrics: Vec::new(),
            entered_at: None,
        })
    }

    #[must_use]
    pub fn id(mut self, id: VentureId) -> Self {
        self.0.id = Some(id);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = description.into();
        self
    }

    #[must_use]
    pub fn long_description(mut self, long_description: Option<String>) -> Self {
        self.0.long_description = long_description;
        self
    }

    #[must_use]
    pub fn logo(mut self, logo: Option<String>) -> Self {
        self.0.logo = logo;
        self
    }

    #[must_use]
    pub fn deal_size(mut self, deal_size: Money) -> Self {
        self.0.deal_size = deal_size;
        self
    }

    #[must_use]
    pub fn valuation(mut self, valuation: Money) -> Self {
        self.0.valuation = valuation;
        self
    }

    #[must_use]
    pub fn funding_stage(mut self, funding_stage: FundingStage) -> Self {
        self.0.funding_stage = funding_stage;
        self
    }

    #[must_use]
    pub fn deal_type(mut self, deal_type: DealType) -> Self {
        self.0.deal_type = deal_type;
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.0.priority = priority;
        self
    }

    #[must_use]
    pub fn source(mut self, source: VentureSource) -> Self {
        self.0.source = source;
        self
    }

    #[must_use]
    pub fn funding_round(mut self, round: FundingRound) -> Self {
        self.0.funding_rounds.push(round);
        self
    }

    #[must_use]
    pub fn metric(mut self, metric: PerformanceMetric) -> Self {
        self.0.metrics.push(metric);
        self
    }

    #[must_use]
    pub fn entered_at(mut self, at: DateTime<Utc>) -> Self {
        self.0.entered_at = Some(at);
        self
    }

    #[must_use]
    pub fn build(self) -> NewVenture {
        self.0
    }
}
