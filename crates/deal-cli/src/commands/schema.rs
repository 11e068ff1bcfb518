use deal_core::actions::PipelineAction;
use deal_core::audit_detail::{EnteredDetail, StageChangedDetail};
use deal_core::entities::{AuditEntry, StageChange, Venture};
use deal_core::responses::{BoardResponse, HistoryResponse, ScriptRunResponse, TransitionResponse};
use deal_core::routes::Section;
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Names accepted by `dealflow schema`, sorted.
pub const SCHEMA_NAMES: [&str; 11] = [
    "audit-entry",
    "board",
    "entered-detail",
    "history",
    "pipeline-action",
    "run",
    "section",
    "stage-change",
    "stage-changed-detail",
    "transition",
    "venture",
];

/// Handle `dealflow schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(&args.type_name)?, flags.format)
}

pub fn schema(name: &str) -> anyhow::Result<Schema> {
    let schema = match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "audit-entry" => schema_for!(AuditEntry),
        "board" => schema_for!(BoardResponse),
        "entered-detail" => schema_for!(EnteredDetail),
        "history" => schema_for!(HistoryResponse),
        "pipeline-action" => schema_for!(PipelineAction),
        "run" => schema_for!(ScriptRunResponse),
        "section" => schema_for!(Section),
        "stage-change" => schema_for!(StageChange),
        "stage-changed-detail" => schema_for!(StageChangedDetail),
        "transition" => schema_for!(TransitionResponse),
        "venture" => schema_for!(Venture),
        _ => anyhow::bail!(
            "unknown schema type '{name}' (expected one of: {})",
            SCHEMA_NAMES.join(", ")
        ),
    };
    Ok(schema)
}
