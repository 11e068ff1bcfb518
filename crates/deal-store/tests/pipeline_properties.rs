//! Behavioural properties of the pipeline store, exercised through the
//! public API only.

use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use deal_core::enums::Stage;
use deal_core::ids::VentureId;
use deal_store::seed::demo_seed;
use deal_store::{AuditFilter, FilterCriteria, PipelineStore, StoreError};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
}

fn demo_store() -> PipelineStore {
    PipelineStore::with_ventures(demo_seed(now()).unwrap()).unwrap()
}

fn ids(ventures: &[deal_core::entities::Venture]) -> BTreeSet<VentureId> {
    ventures.iter().map(|v| v.id).collect()
}

/// Every (from, to) pair that is not an edge of the stage graph.
fn non_edges() -> Vec<(Stage, Stage)> {
    Stage::ALL
        .into_iter()
        .flat_map(|from| Stage::ALL.into_iter().map(move |to| (from, to)))
        .filter(|(from, to)| !from.can_transition_to(*to))
        .collect()
}

#[test]
fn screening_venture_cannot_skip_to_deal_terms() {
    let store = demo_store();

    let err = store
        .transition(VentureId(1), Stage::DealTerms, "analyst")
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::InvalidTransition {
            from: Stage::Screening,
            to: Stage::DealTerms,
            ..
        }
    ));

    let moved = store
        .transition(VentureId(1), Stage::DueDiligence, "analyst")
        .unwrap();
    assert_eq!(moved.stage, Stage::DueDiligence);
}

#[test]
fn moved_venture_shows_up_in_its_new_column_with_a_fresh_clock() {
    let store = demo_store();
    assert!(store.get(VentureId(1)).unwrap().days_in_stage > 0);

    store
        .transition(VentureId(1), Stage::DueDiligence, "analyst")
        .unwrap();

    let column = store.list_by_stage(Stage::DueDiligence);
    let venture = column.iter().find(|v| v.id == VentureId(1)).unwrap();
    assert_eq!(venture.days_in_stage, 0);
    assert!(store.list_by_stage(Stage::Screening).iter().all(|v| v.id != VentureId(1)));
}

#[test]
fn failed_transitions_never_change_anything() {
    let store = demo_store();

    for (from, to) in non_edges() {
        let Some(venture) = store.list_by_stage(from).into_iter().next() else {
            continue;
        };
        let audit_len = store.audit(&AuditFilter::default()).len();
        let history = store.history(venture.id).unwrap();

        let err = store.transition(venture.id, to, "analyst").unwrap_err();
        assert!(err.is_invalid_transition(), "{from} -> {to}: {err}");

        assert_eq!(store.get(venture.id).unwrap(), venture);
        assert_eq!(store.history(venture.id).unwrap(), history);
        assert_eq!(store.audit(&AuditFilter::default()).len(), audit_len);
    }
}

#[rstest]
#[case::closed(6)]
#[case::passed(7)]
fn terminal_stages_are_never_left(#[case] id: u64) {
    let store = demo_store();
    let before = store.get(VentureId(id)).unwrap();
    assert!(before.is_terminal());

    for to in Stage::ALL {
        assert!(store.transition(VentureId(id), to, "analyst").is_err());
    }
    assert!(store.advance(VentureId(id), "analyst").is_err());
    assert!(store.pass(VentureId(id), "analyst", None).is_err());
    assert_eq!(store.get(VentureId(id)).unwrap(), before);
}

#[test]
fn empty_filter_equals_union_of_stage_columns() {
    let store = demo_store();
    let all = ids(&store.apply_filter(&FilterCriteria::default()));

    let union: BTreeSet<VentureId> = Stage::ALL
        .into_iter()
        .flat_map(|stage| store.list_by_stage(stage))
        .map(|v| v.id)
        .collect();

    assert_eq!(all, union);
    assert_eq!(all.len(), store.len());
}

#[test]
fn industry_filter_picks_exactly_the_match() {
    let store = demo_store();
    let screening_fintech = store.apply_filter(
        &FilterCriteria::new()
            .stage(Stage::Screening)
            .industry("Fintech"),
    );
    assert_eq!(ids(&screening_fintech), BTreeSet::from([VentureId(1)]));

    // Without the stage constraint the passed Fintech deal matches too.
    let any_fintech = store.apply_filter(&FilterCriteria::new().industry("fintech"));
    assert_eq!(ids(&any_fintech), BTreeSet::from([VentureId(1), VentureId(7)]));
}

#[test]
fn filtering_is_read_only() {
    let store = demo_store();
    let before = store.list();
    let _ = store.apply_filter(&FilterCriteria::new().market("Lagos"));
    assert_eq!(store.list(), before);
}

#[test]
fn columns_are_ordered_newest_first() {
    let store = demo_store();
    for stage in Stage::ALL {
        let column = store.list_by_stage(stage);
        for pair in column.windows(2) {
            assert!(
                pair[0].last_update > pair[1].last_update
                    || (pair[0].last_update == pair[1].last_update && pair[0].id < pair[1].id)
            );
        }
    }
}

#[test]
fn full_walk_to_closed_records_complete_history() {
    let store = demo_store();
    for _ in 0..4 {
        store.advance(VentureId(8), "analyst").unwrap();
    }
    let venture = store.get(VentureId(8)).unwrap();
    assert_eq!(venture.stage, Stage::ClosedDeals);
    assert_eq!(venture.version, 4);

    let path: Vec<(Stage, Stage)> = store
        .history(VentureId(8))
        .unwrap()
        .iter()
        .map(|c| (c.from, c.to))
        .collect();
    assert_eq!(
        path,
        vec![
            (Stage::Screening, Stage::DueDiligence),
            (Stage::DueDiligence, Stage::DealTerms),
            (Stage::DealTerms, Stage::DealClosing),
            (Stage::DealClosing, Stage::ClosedDeals),
        ]
    );
}
