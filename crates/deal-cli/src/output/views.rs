//! Compact row projections for table output.

use chrono::{DateTime, Utc};
use deal_core::entities::Venture;
use deal_core::enums::Stage;
use deal_core::ids::VentureId;
use deal_core::responses::StageColumn;
use serde::Serialize;

/// A venture as shown on a pipeline card.
#[derive(Debug, Serialize)]
pub struct VentureRow {
    pub id: VentureId,
    pub name: String,
    pub industry: String,
    pub market: String,
    pub stage: Stage,
    pub deal_size: String,
    pub days: u32,
    pub updated: String,
    pub flag: &'static str,
}

impl VentureRow {
    pub fn new(venture: &Venture, now: DateTime<Utc>, stale_after_days: u32) -> Self {
        Self {
            id: venture.id,
            name: venture.name.clone(),
            industry: venture.industry.clone(),
            market: venture.market.clone(),
            stage: venture.stage,
            deal_size: venture.deal_size.to_string(),
            days: venture.days_in_stage,
            updated: venture.last_update_label(now),
            flag: if venture.is_stale(stale_after_days) {
                "stale"
            } else {
                ""
            },
        }
    }
}

/// One board column summarized on a single line.
#[derive(Debug, Serialize)]
pub struct ColumnRow {
    pub stage: Stage,
    pub count: usize,
    pub stale: usize,
    pub ventures: String,
}

impl From<&StageColumn> for ColumnRow {
    fn from(column: &StageColumn) -> Self {
        Self {
            stage: column.stage,
            count: column.count,
            stale: column.stale,
            ventures: column
                .ventures
                .iter()
                .map(|v| v.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
