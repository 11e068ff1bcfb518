//! Action scripts: JSONL files with one [`PipelineAction`] per line.
//!
//! Running a script applies each action in order. A rejected action is
//! reported and skipped; it never aborts the run or disturbs the store.

use std::path::Path;

use anyhow::Context;
use deal_core::actions::PipelineAction;
use deal_core::responses::{RejectedAction, ScriptRunResponse};

use crate::board::board;
use crate::error::StoreError;
use crate::repos::transition::ActionOutcome;
use crate::service::PipelineStore;

/// Read every action from a JSONL script.
///
/// # Errors
///
/// Returns `StoreError::Other` naming the file and 1-based line number of the
/// first malformed action, or if the file cannot be opened.
pub fn load_script(path: &Path) -> Result<Vec<PipelineAction>, StoreError> {
    let lines = serde_jsonlines::json_lines::<PipelineAction, _>(path)
        .with_context(|| format!("failed to open action script {}", path.display()))?;

    let mut actions = Vec::new();
    for (index, line) in lines.enumerate() {
        let action = line.with_context(|| {
            format!("{}: line {}: invalid action", path.display(), index + 1)
        })?;
        actions.push(action);
    }
    tracing::debug!(path = %path.display(), count = actions.len(), "loaded action script");
    Ok(actions)
}

/// Apply `actions` in order and report what happened.
#[must_use]
pub fn run_script(
    store: &PipelineStore,
    actions: &[PipelineAction],
    actor: &str,
    stale_after_days: u32,
) -> ScriptRunResponse {
    let mut applied = 0;
    let mut rejected = Vec::new();
    let mut changes = Vec::new();

    for (index, action) in actions.iter().enumerate() {
        match store.apply_action(action, actor) {
            Ok(outcome) => {
                applied += 1;
                if let ActionOutcome::Moved(moved) = outcome {
                    changes.push(moved.change);
                }
            }
            Err(error) => rejected.push(RejectedAction {
                line: index + 1,
                action: action.label().to_string(),
                venture_id: action.venture(),
                error: error.to_string(),
            }),
        }
    }

    tracing::info!(applied, rejected = rejected.len(), "action script finished");
    ScriptRunResponse {
        applied,
        rejected,
        changes,
        board: board(store, stale_after_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{fixed_now, test_store};
    use deal_core::enums::Stage;
    use deal_core::ids::VentureId;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn script() -> Vec<PipelineAction> {
        vec![
            PipelineAction::Advance {
                venture: VentureId(1),
            },
            // Skips deal-terms: rejected.
            PipelineAction::Transition {
                venture: VentureId(2),
                to: Stage::DealClosing,
                reason: None,
            },
            PipelineAction::Pass {
                venture: VentureId(2),
                reason: Some("thin margins".into()),
            },
            PipelineAction::RefreshDays {
                now: fixed_now() + chrono::Duration::days(2),
            },
            PipelineAction::Advance {
                venture: VentureId(99),
            },
        ]
    }

    #[test]
    fn run_collects_changes_and_rejections() {
        let store = test_store();
        let response = run_script(&store, &script(), "analyst", 30);

        assert_eq!(response.applied, 3);
        assert_eq!(response.changes.len(), 2);
        assert_eq!(
            response
                .rejected
                .iter()
                .map(|r| (r.line, r.action.as_str()))
                .collect::<Vec<_>>(),
            vec![(2, "transition"), (5, "advance")]
        );
        assert_eq!(response.rejected[1].venture_id, Some(VentureId(99)));
        assert_eq!(response.board.total, 5);
        assert_eq!(store.get(VentureId(2)).unwrap().stage, Stage::PassedDeals);
    }

    #[test]
    fn load_script_reads_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moves.jsonl");
        serde_jsonlines::write_json_lines(&path, &script()).unwrap();

        assert_eq!(load_script(&path).unwrap(), script());
    }

    #[test]
    fn load_script_names_the_bad_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"action":"advance","venture":1}}"#).unwrap();
        writeln!(file, r#"{{"action":"teleport","venture":1}}"#).unwrap();

        let err = load_script(file.path()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn missing_script_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_script(&dir.path().join("none.jsonl")).is_err());
    }
}
