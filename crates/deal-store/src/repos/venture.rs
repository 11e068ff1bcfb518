//! Venture repository: create, seed, lookup, stage views, filtering.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use deal_core::audit_detail::EnteredDetail;
use deal_core::entities::Venture;
use deal_core::enums::{AuditAction, Stage};
use deal_core::ids::VentureId;

use crate::error::StoreError;
use crate::filter::FilterCriteria;
use crate::inputs::NewVenture;
use crate::service::PipelineStore;

/// Actor recorded on audit entries for seeded ventures.
pub const SEED_ACTOR: &str = "seed";

/// Display order: most recently updated first, then ascending id.
pub(crate) fn sort_for_display(ventures: &mut [Venture]) {
    ventures.sort_by(|a, b| {
        b.last_update
            .cmp(&a.last_update)
            .then_with(|| a.id.cmp(&b.id))
    });
}

fn entered_detail(venture: &Venture) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(EnteredDetail {
        stage: venture.stage,
        name: venture.name.clone(),
    })
    .map_err(|e| StoreError::Other(e.into()))
}

impl PipelineStore {
    /// Open a new venture in `screening`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for blank required fields, an
    /// explicit id that is already taken, or when no id above the highest
    /// one in use is left. The store is unchanged on error.
    pub fn create_venture(&self, new: NewVenture, actor: &str) -> Result<Venture, StoreError> {
        let at = new.entered_at.unwrap_or_else(Utc::now);
        let mut state = self.write();

        let id = match new.id {
            Some(id) if state.ventures.contains_key(&id) => {
                return Err(StoreError::Validation(format!(
                    "venture id {id} is already in use"
                )));
            }
            Some(id) => id,
            None => state.next_venture_id()?,
        };

        let venture = Venture {
            id,
            name: new.name.trim().to_string(),
            description: new.description,
            long_description: new.long_description,
            industry: new.industry.trim().to_string(),
            market: new.market.trim().to_string(),
            logo: new.logo,
            deal_size: new.deal_size,
            valuation: new.valuation,
            funding_stage: new.funding_stage,
            deal_type: new.deal_type,
            stage: Stage::Screening,
            priority: new.priority,
            days_in_stage: 0,
            stage_entered_at: at,
            last_update: at,
            version: 0,
            source: new.source,
            funding_rounds: new.funding_rounds,
            metrics: new.metrics,
        };
        venture.validate()?;

        let entry = state.audit_entry(
            id,
            AuditAction::Created,
            actor,
            Some(entered_detail(&venture)?),
            at,
        );
        state.ventures.insert(id, venture.clone());
        state.history.entry(id).or_default();
        state.push_audit(entry);

        tracing::debug!(venture = %id, source = %venture.source, "venture created in screening");
        Ok(venture)
    }

    /// Bulk-load pre-existing ventures in any stage.
    ///
    /// The batch is all-or-nothing: every record is validated and checked for
    /// id clashes before any is inserted. Returns the number loaded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for blank required fields or duplicate ids.
    pub fn seed(&self, ventures: Vec<Venture>) -> Result<usize, StoreError> {
        let mut state = self.write();

        let mut seen = HashSet::with_capacity(ventures.len());
        let mut entries = Vec::with_capacity(ventures.len());
        for venture in &ventures {
            venture.validate()?;
            if state.ventures.contains_key(&venture.id) || !seen.insert(venture.id) {
                return Err(StoreError::Validation(format!(
                    "duplicate venture id {}",
                    venture.id
                )));
            }
            entries.push(Some(entered_detail(venture)?));
        }

        let count = ventures.len();
        for (venture, detail) in ventures.into_iter().zip(entries) {
            let entry = state.audit_entry(
                venture.id,
                AuditAction::Seeded,
                SEED_ACTOR,
                detail,
                venture.last_update,
            );
            state.history.entry(venture.id).or_default();
            state.ventures.insert(venture.id, venture);
            state.push_audit(entry);
        }

        tracing::info!(count, "seeded pipeline store");
        Ok(count)
    }

    /// Look up a venture by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no venture has that id.
    pub fn get(&self, id: VentureId) -> Result<Venture, StoreError> {
        self.read()
            .ventures
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    /// All ventures, most recently updated first.
    #[must_use]
    pub fn list(&self) -> Vec<Venture> {
        let mut ventures: Vec<Venture> = self.read().ventures.values().cloned().collect();
        sort_for_display(&mut ventures);
        ventures
    }

    /// Ventures currently in `stage`, most recently updated first (ties by id).
    #[must_use]
    pub fn list_by_stage(&self, stage: Stage) -> Vec<Venture> {
        self.apply_filter(&FilterCriteria::new().stage(stage))
    }

    /// Ventures matching every option in `criteria`, in display order.
    ///
    /// Read-only: takes the shared lock and never mutates.
    #[must_use]
    pub fn apply_filter(&self, criteria: &FilterCriteria) -> Vec<Venture> {
        let mut ventures: Vec<Venture> = self
            .read()
            .ventures
            .values()
            .filter(|venture| criteria.matches(venture))
            .cloned()
            .collect();
        sort_for_display(&mut ventures);
        ventures
    }

    /// Number of ventures in each stage; every stage is present, possibly with 0.
    #[must_use]
    pub fn stage_counts(&self) -> BTreeMap<Stage, usize> {
        let mut counts: BTreeMap<Stage, usize> = Stage::ALL.into_iter().map(|s| (s, 0)).collect();
        for venture in self.read().ventures.values() {
            *counts.entry(venture.stage).or_default() += 1;
        }
        counts
    }

    /// Recompute `days_in_stage` for every venture as of `now`.
    ///
    /// This is clock upkeep, not a mutation of the record: `version` and
    /// `last_update` are left alone. Returns how many ventures changed.
    pub fn refresh_days(&self, now: DateTime<Utc>) -> usize {
        let mut state = self.write();
        let updated = state
            .ventures
            .values_mut()
            .map(|venture| venture.refresh_days(now))
            .filter(|changed| *changed)
            .count();
        tracing::debug!(updated, %now, "refreshed days in stage");
        updated
    }
}
