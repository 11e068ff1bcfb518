//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use chrono::Utc;
use deal_core::actions::PipelineAction;
use deal_core::audit_detail::{EnteredDetail, StageChangedDetail};
use deal_core::entities::*;
use deal_core::enums::*;
use deal_core::ids::VentureId;
use deal_core::money::Money;
use deal_core::responses::*;
use deal_core::routes::Section;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn venture(id: u64, stage: Stage) -> Venture {
    let now = Utc::now();
    Venture {
        id: VentureId(id),
        name: "GreenHarvest".into(),
        description: "Precision irrigation for smallholders".into(),
        long_description: Some("Soil sensors plus an SMS advisory service.".into()),
        industry: "AgTech".into(),
        market: "Nairobi".into(),
        logo: Some("/logos/greenharvest.png".into()),
        deal_size: Money::from_dollars(1_500_000),
        valuation: Money::from_dollars(9_000_000),
        funding_stage: FundingStage::SeriesA,
        deal_type: DealType::Secondary,
        stage,
        priority: Priority::Medium,
        days_in_stage: 12,
        stage_entered_at: now,
        last_update: now,
        version: 3,
        source: VentureSource::SavedOpportunity,
        funding_rounds: vec![FundingRound {
            stage: FundingStage::Seed,
            amount: Money::from_dollars(400_000),
            date: "Q2 2024".into(),
            lead_investor: Some("Savannah Angels".into()),
        }],
        metrics: vec![PerformanceMetric {
            name: "ARR".into(),
            value: "$1.1M".into(),
            period: Some("2025".into()),
        }],
    }
}

fn change(id: u64) -> StageChange {
    StageChange {
        venture_id: VentureId(id),
        sequence: 1,
        from: Stage::Screening,
        to: Stage::DueDiligence,
        actor: "analyst".into(),
        reason: None,
        changed_at: Utc::now(),
    }
}

roundtrip_and_validate!(venture_roundtrip, Venture, venture(1, Stage::DealTerms));

roundtrip_and_validate!(stage_change_roundtrip, StageChange, change(1));

roundtrip_and_validate!(
    audit_entry_roundtrip,
    AuditEntry,
    AuditEntry {
        id: 7,
        venture_id: VentureId(1),
        action: AuditAction::StageChanged,
        actor: "analyst".into(),
        detail: Some(
            serde_json::to_value(StageChangedDetail {
                from: Stage::DealClosing,
                to: Stage::ClosedDeals,
                reason: Some("wire received".into()),
            })
            .unwrap()
        ),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    entered_detail_roundtrip,
    EnteredDetail,
    EnteredDetail {
        stage: Stage::Screening,
        name: "PayLink".into(),
    }
);

roundtrip_and_validate!(
    action_roundtrip,
    PipelineAction,
    PipelineAction::Pass {
        venture: VentureId(4),
        reason: Some("team risk".into()),
    }
);

roundtrip_and_validate!(section_roundtrip, Section, Section::VenturePipeline);

roundtrip_and_validate!(
    board_response_roundtrip,
    BoardResponse,
    BoardResponse {
        columns: vec![StageColumn {
            stage: Stage::Screening,
            title: Stage::Screening.title().into(),
            count: 1,
            stale: 0,
            ventures: vec![venture(2, Stage::Screening)],
        }],
        total: 1,
    }
);

roundtrip_and_validate!(
    transition_response_roundtrip,
    TransitionResponse,
    TransitionResponse {
        venture: venture(1, Stage::DueDiligence),
        change: change(1),
    }
);

roundtrip_and_validate!(
    script_run_response_roundtrip,
    ScriptRunResponse,
    ScriptRunResponse {
        applied: 1,
        rejected: vec![RejectedAction {
            line: 2,
            action: "transition".into(),
            venture_id: Some(VentureId(1)),
            error: "Invalid transition".into(),
        }],
        changes: vec![change(1)],
        board: BoardResponse {
            columns: Vec::new(),
            total: 0,
        },
    }
);

#[test]
fn venture_accepts_source_money_strings() {
    let mut value = serde_json::to_value(venture(1, Stage::Screening)).unwrap();
    value["deal_size"] = serde_json::json!("$2.5M");
    value["valuation"] = serde_json::json!(12_000_000);

    let parsed: Venture = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.deal_size.dollars(), 2_500_000);
    assert_eq!(parsed.valuation.to_string(), "$12M");
}

#[test]
fn venture_optional_collections_default_to_empty() {
    let mut value = serde_json::to_value(venture(1, Stage::Screening)).unwrap();
    let map = value.as_object_mut().unwrap();
    map.remove("funding_rounds");
    map.remove("metrics");
    map.remove("version");
    map.remove("source");

    let parsed: Venture = serde_json::from_value(value).unwrap();
    assert!(parsed.funding_rounds.is_empty());
    assert!(parsed.metrics.is_empty());
    assert_eq!(parsed.version, 0);
    assert_eq!(parsed.source, VentureSource::Marketplace);
}

#[test]
fn venture_rejects_unknown_stage() {
    let mut value = serde_json::to_value(venture(1, Stage::Screening)).unwrap();
    value["stage"] = serde_json::json!("archived");
    assert!(serde_json::from_value::<Venture>(value).is_err());
}
