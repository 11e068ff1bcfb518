//! Seed data loading.
//!
//! A seed file is a JSON array of ventures in any stage. Seed records are
//! looser than [`Venture`]: the stage clock may be given as `days_in_stage`
//! alone and is resolved against "now" at load time.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use deal_core::entities::{FundingRound, PerformanceMetric, Venture};
use deal_core::enums::{DealType, FundingStage, Priority, Stage, VentureSource};
use deal_core::ids::VentureId;
use deal_core::money::Money;
use serde::Deserialize;

use crate::error::StoreError;

const DEMO_SEED: &str = include_str!("../data/demo_seed.json");

/// One venture as written in a seed file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedVenture {
    pub id: VentureId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    pub industry: String,
    pub market: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub deal_size: Money,
    pub valuation: Money,
    pub funding_stage: FundingStage,
    pub deal_type: DealType,
    #[serde(default)]
    pub stage: Stage,
    #[serde(default)]
    pub priority: Priority,
    /// Days already spent in `stage`; ignored when `stage_entered_at` is set.
    #[serde(default)]
    pub days_in_stage: Option<u32>,
    #[serde(default)]
    pub stage_entered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source: VentureSource,
    #[serde(default)]
    pub funding_rounds: Vec<FundingRound>,
    #[serde(default)]
    pub metrics: Vec<PerformanceMetric>,
}

impl SeedVenture {
    /// Resolve the stage clock against `now` and build the venture.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `days_in_stage` reaches back past
    /// the earliest representable timestamp.
    pub fn into_venture(self, now: DateTime<Utc>) -> Result<Venture, StoreError> {
        let stage_entered_at = match self.stage_entered_at {
            Some(at) => at,
            None => {
                let days = self.days_in_stage.unwrap_or(0);
                Duration::try_days(i64::from(days))
                    .and_then(|elapsed| now.checked_sub_signed(elapsed))
                    .ok_or_else(|| {
                        StoreError::Validation(format!(
                            "venture {}: days_in_stage {days} is out of range",
                            self.id
                        ))
                    })?
            }
        };
        let mut venture = Venture {
            id: self.id,
            name: self.name,
            description: self.description,
            long_description: self.long_description,
            industry: self.industry,
            market: self.market,
            logo: self.logo,
            deal_size: self.deal_size,
            valuation: self.valuation,
            funding_stage: self.funding_stage,
            deal_type: self.deal_type,
            stage: self.stage,
            priority: self.priority,
            days_in_stage: 0,
            stage_entered_at,
            last_update: self.last_update.unwrap_or(stage_entered_at),
            version: 0,
            source: self.source,
            funding_rounds: self.funding_rounds,
            metrics: self.metrics,
        };
        venture.refresh_days(now);
        Ok(venture)
    }
}

/// Parse seed JSON and resolve every record against `now`.
///
/// # Errors
///
/// Returns `StoreError::Other` if the JSON is malformed or a record has an
/// unknown field, stage, or unparseable money value, and
/// `StoreError::Validation` for an out-of-range `days_in_stage`.
pub fn parse_seed(json: &str, now: DateTime<Utc>) -> Result<Vec<Venture>, StoreError> {
    let records: Vec<SeedVenture> =
        serde_json::from_str(json).context("failed to parse seed ventures")?;
    resolve(records, now)
}

fn resolve(records: Vec<SeedVenture>, now: DateTime<Utc>) -> Result<Vec<Venture>, StoreError> {
    records
        .into_iter()
        .map(|record| record.into_venture(now))
        .collect()
}

/// Load a seed file from disk.
///
/// # Errors
///
/// Returns `StoreError::Other` if the file cannot be read or parsed, and
/// `StoreError::Validation` for an out-of-range `days_in_stage`.
pub fn load_seed_file(path: &Path, now: DateTime<Utc>) -> Result<Vec<Venture>, StoreError> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let records: Vec<SeedVenture> = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;
    let ventures = resolve(records, now)?;
    tracing::debug!(path = %path.display(), count = ventures.len(), "loaded seed file");
    Ok(ventures)
}

/// The built-in demo pipeline.
///
/// # Errors
///
/// Only if the embedded seed is malformed.
pub fn demo_seed(now: DateTime<Utc>) -> Result<Vec<Venture>, StoreError> {
    parse_seed(DEMO_SEED, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::PipelineStore;
    use crate::test_support::helpers::fixed_now;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn demo_seed_loads_into_a_store() {
        let ventures = demo_seed(fixed_now()).unwrap();
        assert_eq!(ventures.len(), 8);

        let store = PipelineStore::with_ventures(ventures).unwrap();
        let counts = store.stage_counts();
        assert_eq!(counts[&Stage::Screening], 3);
        assert_eq!(counts[&Stage::ClosedDeals], 1);
        assert_eq!(counts[&Stage::PassedDeals], 1);
    }

    #[test]
    fn days_in_stage_backdates_the_stage_clock() {
        let ventures = demo_seed(fixed_now()).unwrap();
        let sungrid = ventures.iter().find(|v| v.id == VentureId(4)).unwrap();
        assert_eq!(sungrid.days_in_stage, 41);
        assert_eq!(sungrid.stage_entered_at, fixed_now() - Duration::days(41));
        assert_eq!(sungrid.last_update, sungrid.stage_entered_at);
        assert_eq!(sungrid.deal_size.dollars(), 5_000_000);
    }

    #[test]
    fn explicit_timestamp_wins_over_days() {
        let json = r#"[{
            "id": 9, "name": "Kora", "industry": "Fintech", "market": "Dakar",
            "deal_size": "1,000,000", "valuation": "$4M",
            "funding_stage": "seed", "deal_type": "primary",
            "days_in_stage": 99,
            "stage_entered_at": "2026-03-10T12:00:00Z"
        }]"#;
        let ventures = parse_seed(json, fixed_now()).unwrap();
        assert_eq!(ventures[0].stage, Stage::Screening);
        assert_eq!(ventures[0].days_in_stage, 5);
    }

    #[test]
    fn days_beyond_the_calendar_are_a_validation_error() {
        let json = r#"[{
            "id": 9, "name": "Kora", "industry": "Fintech", "market": "Dakar",
            "deal_size": "$1M", "valuation": "$4M",
            "funding_stage": "seed", "deal_type": "primary",
            "days_in_stage": 4000000000
        }]"#;
        let err = parse_seed(json, fixed_now()).unwrap_err();
        assert!(
            matches!(err, StoreError::Validation(ref m) if m.contains("days_in_stage")),
            "{err}"
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"[{
            "id": 9, "name": "Kora", "industry": "Fintech", "market": "Dakar",
            "deal_size": "$1M", "valuation": "$4M",
            "funding_stage": "seed", "deal_type": "primary",
            "rating": 5
        }]"#;
        let err = parse_seed(json, fixed_now()).unwrap_err();
        assert!(format!("{err:#}").contains("rating"));
    }

    #[test]
    fn load_seed_file_reports_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_seed_file(file.path(), fixed_now()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_seed_file(&dir.path().join("absent.json"), fixed_now()).unwrap_err();
        assert!(err.to_string().contains("failed to read seed file"));
    }
}
