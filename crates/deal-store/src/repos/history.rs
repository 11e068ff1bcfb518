//! Per-venture stage history.

use deal_core::entities::StageChange;
use deal_core::ids::VentureId;

use crate::error::StoreError;
use crate::service::PipelineStore;

impl PipelineStore {
    /// Stage changes for venture `id`, oldest first.
    ///
    /// A venture that never moved has an empty history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no venture has that id.
    pub fn history(&self, id: VentureId) -> Result<Vec<StageChange>, StoreError> {
        let state = self.read();
        if !state.ventures.contains_key(&id) {
            return Err(StoreError::NotFound { id });
        }
        Ok(state.history.get(&id).cloned().unwrap_or_default())
    }
}
