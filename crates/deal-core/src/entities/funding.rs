use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FundingStage;
use crate::money::Money;

/// A past financing round shown on a venture's detail view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FundingRound {
    pub stage: FundingStage,
    pub amount: Money,
    /// Free-form date label, e.g. "Q3 2024".
    pub date: String,
    pub lead_investor: Option<String>,
}

/// A headline KPI reported by the venture (revenue, users, growth).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PerformanceMetric {
    pub name: String,
    pub value: String,
    pub period: Option<String>,
}
