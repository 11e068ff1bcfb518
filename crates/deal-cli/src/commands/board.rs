use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::render_board;

/// Handle `dealflow board`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = deal_store::board(&ctx.store, ctx.stale_after_days());
    println!("{}", render_board(&board, flags.format)?);
    Ok(())
}
