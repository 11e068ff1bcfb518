use std::sync::Arc;

use deal_store::{HostEvent, PipelineController, RecordingHost};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NavigateArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `dealflow navigate`.
pub fn handle(args: &NavigateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&navigate(args, ctx)?, flags.format)
}

/// The host callbacks a front end would receive for this navigation.
pub fn navigate(args: &NavigateArgs, ctx: &AppContext) -> anyhow::Result<Vec<HostEvent>> {
    let mut controller = PipelineController::new(
        Arc::clone(&ctx.store),
        RecordingHost::default(),
        ctx.actor.clone(),
    );
    controller.navigate(&args.section)?;
    Ok(controller.into_host().events)
}
