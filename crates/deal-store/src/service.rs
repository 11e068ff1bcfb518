//! The pipeline store handle.
//!
//! `PipelineStore` owns all venture state behind a single `RwLock`. Repo
//! methods live in `repos/*` as `impl PipelineStore` blocks.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use deal_core::entities::{AuditEntry, StageChange, Venture};
use deal_core::enums::AuditAction;
use deal_core::ids::VentureId;

use crate::error::StoreError;

/// Everything the store knows, mutated only under the write lock.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) ventures: BTreeMap<VentureId, Venture>,
    pub(crate) history: HashMap<VentureId, Vec<StageChange>>,
    pub(crate) audit: Vec<AuditEntry>,
    next_audit_id: u64,
}

impl StoreState {
    /// The id the next auto-numbered venture would get: one past the highest
    /// id in use. Nothing is reserved until the venture is inserted.
    pub(crate) fn next_venture_id(&self) -> Result<VentureId, StoreError> {
        match self.ventures.keys().next_back() {
            None => Ok(VentureId(1)),
            Some(last) => last
                .get()
                .checked_add(1)
                .map(VentureId)
                .ok_or_else(|| StoreError::Validation("venture id space exhausted".into())),
        }
    }

    /// Build (but do not append) the next audit entry.
    pub(crate) fn audit_entry(
        &self,
        venture_id: VentureId,
        action: AuditAction,
        actor: &str,
        detail: Option<serde_json::Value>,
        at: DateTime<Utc>,
    ) -> AuditEntry {
        AuditEntry {
            id: self.next_audit_id + 1,
            venture_id,
            action,
            actor: actor.to_string(),
            detail,
            created_at: at,
        }
    }

    pub(crate) fn push_audit(&mut self, entry: AuditEntry) {
        self.next_audit_id = entry.id;
        self.audit.push(entry);
    }
}

/// Authoritative in-memory store of pipeline ventures.
///
/// The store is `Send + Sync`; share it with `Arc<PipelineStore>`. Every
/// mutation runs under the write lock, so concurrent transitions of the same
/// venture are serialized and each one either fully applies (stage, stage
/// clock, history, audit) or leaves nothing behind.
#[derive(Debug, Default)]
pub struct PipelineStore {
    state: RwLock<StoreState>,
}

impl PipelineStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `ventures`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for blank required fields or duplicate ids.
    pub fn with_ventures(ventures: Vec<Venture>) -> Result<Self, StoreError> {
        let store = Self::new();
        store.seed(ventures)?;
        Ok(store)
    }

    /// Shared access to the state.
    ///
    /// A poisoned lock is recovered: mutations are fully prepared before the
    /// commit step, so a panicking writer cannot leave a half-applied change.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access to the state. See [`Self::read`] on poisoning.
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of ventures in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().ventures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().ventures.is_empty()
    }
}
