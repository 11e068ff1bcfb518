//! Audit log repository.
//!
//! Append-only entries recording every mutation: creation, seeding, and
//! stage changes. Entries are written by the mutating repos; this module
//! only reads them back.

use deal_core::entities::AuditEntry;
use deal_core::enums::AuditAction;
use deal_core::ids::VentureId;

use crate::service::PipelineStore;

/// Filter criteria for audit queries.
#[derive(Debug, Default, Clone)]
pub struct AuditFilter {
    pub venture_id: Option<VentureId>,
    pub action: Option<AuditAction>,
    pub limit: Option<usize>,
}

impl PipelineStore {
    /// Query audit entries, newest first.
    #[must_use]
    pub fn audit(&self, filter: &AuditFilter) -> Vec<AuditEntry> {
        let state = self.read();
        state
            .audit
            .iter()
            .rev()
            .filter(|entry| filter.venture_id.is_none_or(|id| entry.venture_id == id))
            .filter(|entry| filter.action.is_none_or(|action| entry.action == action))
            .take(filter.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}
