use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Stage;
use crate::ids::VentureId;

/// One immutable entry in a venture's stage history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StageChange {
    pub venture_id: VentureId,
    /// Position in the venture's history, starting at 1.
    pub sequence: u32,
    pub from: Stage,
    pub to: Stage,
    pub actor: String,
    pub reason: Option<String>,
    pub changed_at: DateTime<Utc>,
}
