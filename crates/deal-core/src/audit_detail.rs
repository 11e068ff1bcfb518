//! Typed audit detail payloads.
//!
//! Each audit action can carry a structured `detail` JSON blob. These types
//! give the common shapes a schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Stage;

/// Detail for `AuditAction::StageChanged`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StageChangedDetail {
    pub from: Stage,
    pub to: Stage,
    pub reason: Option<String>,
}

/// Detail for `AuditAction::Created` and `AuditAction::Seeded`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnteredDetail {
    pub stage: Stage,
    pub name: String,
}
