//! Stage transitions.
//!
//! Every transition runs inside one write-lock critical section: the venture
//! record, its stage history, and the audit log are updated together or not
//! at all. All fallible work happens before the first write.

use chrono::{DateTime, Utc};
use deal_core::actions::PipelineAction;
use deal_core::audit_detail::StageChangedDetail;
use deal_core::entities::{StageChange, Venture};
use deal_core::enums::{AuditAction, Stage};
use deal_core::ids::VentureId;
use deal_core::responses::TransitionResponse;
use serde::Serialize;

use crate::error::StoreError;
use crate::service::PipelineStore;

/// Optional knobs for [`PipelineStore::transition_with`].
#[derive(Debug, Clone, Default)]
pub struct TransitionOptions<'a> {
    pub actor: &'a str,
    pub reason: Option<&'a str>,
    /// Reject with `VersionConflict` unless the venture is at this version.
    pub expected_version: Option<u64>,
    /// Transition timestamp; defaults to now.
    pub at: Option<DateTime<Utc>>,
}

impl<'a> TransitionOptions<'a> {
    #[must_use]
    pub fn by(actor: &'a str) -> Self {
        Self {
            actor,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn reason(mut self, reason: Option<&'a str>) -> Self {
        self.reason = reason;
        self
    }

    #[must_use]
    pub const fn expecting(mut self, version: u64) -> Self {
        self.expected_version = Some(version);
        self
    }

    #[must_use]
    pub fn at(mut self, at: DateTime<Utc>) -> Self {
        self.at = Some(at);
        self
    }
}

/// Result of applying a [`PipelineAction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum ActionOutcome {
    Moved(TransitionResponse),
    Refreshed { updated: usize },
}

impl PipelineStore {
    /// Move venture `id` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id and
    /// `StoreError::InvalidTransition` when `to` is not adjacent to the
    /// current stage (skips, backward moves, same-stage moves, and any move
    /// out of a terminal stage). The store is unchanged on error.
    pub fn transition(&self, id: VentureId, to: Stage, actor: &str) -> Result<Venture, StoreError> {
        self.transition_with(id, to, &TransitionOptions::by(actor))
            .map(|response| response.venture)
    }

    /// Compare-and-swap transition: applies only if the venture is still at
    /// `expected_version`.
    ///
    /// # Errors
    ///
    /// As [`Self::transition`], plus `StoreError::VersionConflict`.
    pub fn transition_expecting(
        &self,
        id: VentureId,
        to: Stage,
        actor: &str,
        expected_version: u64,
    ) -> Result<Venture, StoreError> {
        self.transition_with(id, to, &TransitionOptions::by(actor).expecting(expected_version))
            .map(|response| response.venture)
    }

    /// Transition with full options, returning the updated venture and the
    /// history record that was appended.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`] and [`Self::transition_expecting`].
    pub fn transition_with(
        &self,
        id: VentureId,
        to: Stage,
        opts: &TransitionOptions<'_>,
    ) -> Result<TransitionResponse, StoreError> {
        let at = opts.at.unwrap_or_else(Utc::now);
        let mut state = self.write();

        let current = state.ventures.get(&id).ok_or(StoreError::NotFound { id })?;
        let from = current.stage;

        if !from.can_transition_to(to) {
            tracing::warn!(venture = %id, %from, %to, "rejected stage transition");
            return Err(StoreError::InvalidTransition { id, from, to });
        }
        match opts.expected_version {
            Some(expected) if expected != current.version => {
                tracing::warn!(venture = %id, expected, actual = current.version, "version conflict");
                return Err(StoreError::VersionConflict {
                    id,
                    expected,
                    actual: current.version,
                });
            }
            _ => {}
        }

        let mut updated = current.clone();
        updated.enter_stage(to, at)?;

        let sequence = state
            .history
            .get(&id)
            .map_or(0, Vec::len)
            .saturating_add(1);
        let change = StageChange {
            venture_id: id,
            sequence: u32::try_from(sequence).unwrap_or(u32::MAX),
            from,
            to,
            actor: opts.actor.to_string(),
            reason: opts.reason.map(str::to_string),
            changed_at: at,
        };

        let detail = StageChangedDetail {
            from,
            to,
            reason: change.reason.clone(),
        };
        let detail = serde_json::to_value(&detail).map_err(|e| StoreError::Other(e.into()))?;
        let entry = state.audit_entry(id, AuditAction::StageChanged, opts.actor, Some(detail), at);

        // Commit.
        state.ventures.insert(id, updated.clone());
        state.history.entry(id).or_default().push(change.clone());
        state.push_audit(entry);

        tracing::debug!(venture = %id, %from, %to, actor = opts.actor, "venture changed stage");
        Ok(TransitionResponse {
            venture: updated,
            change,
        })
    }

    /// "Pass": move the venture to `passed-deals`.
    ///
    /// # Errors
    ///
    /// `StoreError::InvalidTransition` if the venture is already terminal.
    pub fn pass(
        &self,
        id: VentureId,
        actor: &str,
        reason: Option<&str>,
    ) -> Result<TransitionResponse, StoreError> {
        self.transition_with(
            id,
            Stage::PassedDeals,
            &TransitionOptions::by(actor).reason(reason),
        )
    }

    /// "Proceed": move the venture to its next forward stage.
    ///
    /// # Errors
    ///
    /// `StoreError::InvalidTransition` if the venture is terminal; the
    /// reported target is the current stage since there is no next one.
    pub fn advance(&self, id: VentureId, actor: &str) -> Result<TransitionResponse, StoreError> {
        self.advance_with(id, &TransitionOptions::by(actor))
    }

    /// [`Self::advance`] with an explicit actor, reason, and timestamp.
    /// Any `expected_version` in `opts` is replaced by the version read here.
    ///
    /// # Errors
    ///
    /// See [`Self::advance`].
    pub fn advance_with(
        &self,
        id: VentureId,
        opts: &TransitionOptions<'_>,
    ) -> Result<TransitionResponse, StoreError> {
        let current = self.get(id)?;
        let from = current.stage;
        let to = from.next().ok_or(StoreError::InvalidTransition { id, from, to: from })?;
        // Pin the version we read so a racing writer cannot make us skip a stage.
        self.transition_with(id, to, &opts.clone().expecting(current.version))
    }

    /// Dispatch an action value to the matching store operation.
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation returns.
    pub fn apply_action(
        &self,
        action: &PipelineAction,
        actor: &str,
    ) -> Result<ActionOutcome, StoreError> {
        match action {
            PipelineAction::Transition { venture, to, reason } => self
                .transition_with(
                    *venture,
                    *to,
                    &TransitionOptions::by(actor).reason(reason.as_deref()),
                )
                .map(ActionOutcome::Moved),
            PipelineAction::Advance { venture } => self.advance(*venture, actor).map(ActionOutcome::Moved),
            PipelineAction::Pass { venture, reason } => self
                .pass(*venture, actor, reason.as_deref())
                .map(ActionOutcome::Moved),
            PipelineAction::RefreshDays { now } => Ok(ActionOutcome::Refreshed {
                updated: self.refresh_days(*now),
            }),
        }
    }
}
