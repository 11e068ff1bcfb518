use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Board => commands::board::handle(ctx, flags),
        Commands::List(args) => commands::list::handle_list(&args, ctx, flags),
        Commands::Filter(args) => commands::list::handle_filter(&args, ctx, flags),
        Commands::Get(args) => commands::list::handle_get(&args, ctx, flags),
        Commands::Add(args) => commands::add::handle(&args, ctx, flags),
        Commands::Transition(args) => commands::transition::handle_transition(&args, ctx, flags),
        Commands::Advance(args) => commands::transition::handle_advance(&args, ctx, flags),
        Commands::Pass(args) => commands::transition::handle_pass(&args, ctx, flags),
        Commands::Run(args) => commands::run::handle(&args, ctx, flags),
        Commands::History(args) => commands::history::handle(&args, ctx, flags),
        Commands::Audit(args) => commands::audit::handle(&args, ctx, flags),
        Commands::Navigate(args) => commands::navigate::handle(&args, ctx, flags),
        Commands::Schema(_) | Commands::Sections => {
            unreachable!("schema/sections are pre-dispatched in main")
        }
    }
}
