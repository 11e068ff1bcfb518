//! CLI response types returned as JSON by `dealflow` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{StageChange, Venture};
use crate::enums::Stage;
use crate::ids::VentureId;

/// One column of the pipeline board.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StageColumn {
    pub stage: Stage,
    pub title: String,
    pub count: usize,
    /// Ventures idle in this stage past the configured threshold.
    pub stale: usize,
    pub ventures: Vec<Venture>,
}

/// Response from `dealflow board`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BoardResponse {
    pub columns: Vec<StageColumn>,
    pub total: usize,
}

/// Response from `dealflow transition`, `advance`, and `pass`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TransitionResponse {
    pub venture: Venture,
    pub change: StageChange,
}

/// Response from `dealflow history`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryResponse {
    pub venture_id: VentureId,
    pub stage: Stage,
    pub changes: Vec<StageChange>,
}

/// An action from a script that the store refused.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RejectedAction {
    /// 1-based line number in the script.
    pub line: usize,
    pub action: String,
    pub venture_id: Option<VentureId>,
    pub error: String,
}

/// Response from `dealflow run`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScriptRunResponse {
    pub applied: usize,
    pub rejected: Vec<RejectedAction>,
    pub changes: Vec<StageChange>,
    pub board: BoardResponse,
}
