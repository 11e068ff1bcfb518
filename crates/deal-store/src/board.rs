//! Stage column view and the pipeline controller.
//!
//! `board` renders the store as one column per stage. `PipelineController`
//! is the glue a front end drives: button presses become store actions, and
//! navigation or drill-down requests are handed to the surrounding shell
//! through the [`PipelineHost`] callbacks.

use std::sync::Arc;

use deal_core::actions::PipelineAction;
use deal_core::enums::Stage;
use deal_core::ids::VentureId;
use deal_core::responses::{BoardResponse, StageColumn};
use deal_core::routes::Section;
use serde::Serialize;

use crate::error::StoreError;
use crate::repos::transition::ActionOutcome;
use crate::service::PipelineStore;

/// One column per stage, in pipeline order.
///
/// `stale` counts non-terminal ventures idle for more than
/// `stale_after_days` days.
#[must_use]
pub fn board(store: &PipelineStore, stale_after_days: u32) -> BoardResponse {
    let columns: Vec<StageColumn> = Stage::ALL
        .into_iter()
        .map(|stage| {
            let ventures = store.list_by_stage(stage);
            StageColumn {
                stage,
                title: stage.title().to_string(),
                count: ventures.len(),
                stale: ventures
                    .iter()
                    .filter(|v| v.is_stale(stale_after_days))
                    .count(),
                ventures,
            }
        })
        .collect();
    let total = columns.iter().map(|c| c.count).sum();
    BoardResponse { columns, total }
}

/// Callbacks into the application shell hosting the pipeline view.
pub trait PipelineHost {
    /// Navigate to another named view.
    fn on_section_change(&mut self, section: Section);

    /// Open (or with `None`, close) the detail view for a venture.
    fn on_venture_select(&mut self, venture: Option<VentureId>);
}

/// A host callback, as recorded by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum HostEvent {
    SectionChange { section: Section },
    VentureSelect { venture: Option<VentureId> },
}

/// Host that remembers every callback. Used by the CLI and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
}

impl PipelineHost for RecordingHost {
    fn on_section_change(&mut self, section: Section) {
        self.events.push(HostEvent::SectionChange { section });
    }

    fn on_venture_select(&mut self, venture: Option<VentureId>) {
        self.events.push(HostEvent::VentureSelect { venture });
    }
}

/// Drives a shared store on behalf of one user of the pipeline view.
pub struct PipelineController<H> {
    store: Arc<PipelineStore>,
    host: H,
    actor: String,
}

impl<H: PipelineHost> PipelineController<H> {
    pub fn new(store: Arc<PipelineStore>, host: H, actor: impl Into<String>) -> Self {
        Self {
            store,
            host,
            actor: actor.into(),
        }
    }

    /// Press an action button ("Proceed", "Pass", ...).
    ///
    /// On a successful move the host is asked to show the moved venture. A
    /// rejected action notifies nobody.
    ///
    /// # Errors
    ///
    /// Whatever [`PipelineStore::apply_action`] returns.
    pub fn press(&mut self, action: &PipelineAction) -> Result<ActionOutcome, StoreError> {
        let outcome = self.store.apply_action(action, &self.actor)?;
        if let ActionOutcome::Moved(ref moved) = outcome {
            self.host.on_venture_select(Some(moved.venture.id));
        }
        Ok(outcome)
    }

    /// Ask the host to switch to the section named `section_id`.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` for an unknown section id.
    pub fn navigate(&mut self, section_id: &str) -> Result<Section, StoreError> {
        let section = Section::from_id(section_id)?;
        self.host.on_section_change(section);
        Ok(section)
    }

    /// Ask the host to open (or close) a venture's detail view.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if `venture` names an unknown id.
    pub fn select(&mut self, venture: Option<VentureId>) -> Result<(), StoreError> {
        if let Some(id) = venture {
            self.store.get(id)?;
        }
        self.host.on_venture_select(venture);
        Ok(())
    }

    #[must_use]
    pub fn columns(&self, stale_after_days: u32) -> BoardResponse {
        board(&self.store, stale_after_days)
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
