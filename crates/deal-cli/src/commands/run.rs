use anyhow::Context;
use deal_core::responses::ScriptRunResponse;
use deal_store::script::{load_script, run_script};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RunArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `dealflow run`.
pub fn handle(args: &RunArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args, ctx)?;
    if !response.rejected.is_empty() && !flags.quiet {
        eprintln!(
            "{} of {} actions rejected",
            response.rejected.len(),
            response.rejected.len() + response.applied
        );
    }
    output(&response, flags.format)
}

pub fn run(args: &RunArgs, ctx: &AppContext) -> anyhow::Result<ScriptRunResponse> {
    let actions = load_script(&args.script)
        .with_context(|| format!("cannot run {}", args.script.display()))?;
    Ok(run_script(
        &ctx.store,
        &actions,
        &ctx.actor,
        ctx.stale_after_days(),
    ))
}
