use deal_core::enums::Stage;
use deal_core::responses::TransitionResponse;
use deal_store::TransitionOptions;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{IdArgs, PassArgs, TransitionArgs};
use crate::commands::shared::parse::{parse_enum, parse_id};
use crate::context::AppContext;
use crate::output::output;

/// Handle `dealflow transition`.
pub fn handle_transition(
    args: &TransitionArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&transition(args, ctx)?, flags.format)
}

/// Handle `dealflow advance`.
pub fn handle_advance(args: &IdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&advance(args, ctx)?, flags.format)
}

/// Handle `dealflow pass`.
pub fn handle_pass(args: &PassArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&pass(args, ctx)?, flags.format)
}

pub fn advance(args: &IdArgs, ctx: &AppContext) -> anyhow::Result<TransitionResponse> {
    let opts = TransitionOptions::by(&ctx.actor).at(ctx.now);
    Ok(ctx.store.advance_with(parse_id(&args.id)?, &opts)?)
}

pub fn pass(args: &PassArgs, ctx: &AppContext) -> anyhow::Result<TransitionResponse> {
    let opts = TransitionOptions::by(&ctx.actor)
        .reason(args.reason.as_deref())
        .at(ctx.now);
    Ok(ctx
        .store
        .transition_with(parse_id(&args.id)?, Stage::PassedDeals, &opts)?)
}

pub fn transition(args: &TransitionArgs, ctx: &AppContext) -> anyhow::Result<TransitionResponse> {
    let id = parse_id(&args.id)?;
    let to = parse_enum::<Stage>(&args.stage, "stage")?;
    let opts = TransitionOptions::by(&ctx.actor)
        .reason(args.reason.as_deref())
        .at(ctx.now);
    Ok(ctx.store.transition_with(id, to, &opts)?)
}
