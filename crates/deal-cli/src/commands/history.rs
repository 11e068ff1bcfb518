use deal_core::responses::HistoryResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdArgs;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

/// Handle `dealflow history`.
pub fn handle(args: &IdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_id(&args.id)?;
    let venture = ctx.store.get(id)?;
    let response = HistoryResponse {
        venture_id: id,
        stage: venture.stage,
        changes: ctx.store.history(id)?,
    };
    if flags.format == crate::cli::OutputFormat::Table {
        return output(&response.changes, flags.format);
    }
    output(&response, flags.format)
}
