//! Shared test utilities for deal-store unit tests.

pub(crate) mod helpers {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use deal_core::entities::Venture;
    use deal_core::enums::{DealType, FundingStage, Priority, Stage, VentureSource};
    use deal_core::ids::VentureId;
    use deal_core::money::Money;

    use crate::service::PipelineStore;

    /// A fixed "now" so day counts and orderings are deterministic.
    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    /// A venture in `stage` that last changed `id` hours before `fixed_now()`.
    pub fn venture(id: u64, name: &str, industry: &str, stage: Stage) -> Venture {
        let updated = fixed_now() - Duration::hours(i64::try_from(id).unwrap());
        Venture {
            id: VentureId(id),
            name: name.to_string(),
            description: format!("{name} description"),
            long_description: None,
            industry: industry.to_string(),
            market: "Lagos".to_string(),
            logo: None,
            deal_size: Money::from_dollars(1_000_000),
            valuation: Money::from_dollars(8_000_000),
            funding_stage: FundingStage::Seed,
            deal_type: DealType::Primary,
            stage,
            priority: Priority::Medium,
            days_in_stage: 0,
            stage_entered_at: updated,
            last_update: updated,
            version: 0,
            source: VentureSource::Marketplace,
            funding_rounds: Vec::new(),
            metrics: Vec::new(),
        }
    }

    /// Store with one venture per non-terminal stage plus a second screening venture.
    pub fn test_store() -> PipelineStore {
        PipelineStore::with_ventures(vec![
            venture(1, "PayLink", "Fintech", Stage::Screening),
            venture(2, "GreenHarvest", "AgTech", Stage::Screening),
            venture(3, "MediReach", "HealthTech", Stage::DueDiligence),
            venture(4, "SunGrid", "CleanTech", Stage::DealTerms),
            venture(5, "ShipFast", "Logistics", Stage::DealClosing),
        ])
        .unwrap()
    }
}
