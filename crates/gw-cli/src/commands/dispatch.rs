use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard => commands::dashboard::handle(ctx, flags),
        Commands::Projects(args) => commands::projects::handle(args, ctx, flags),
        Commands::Project(args) => commands::project::handle(args, ctx, flags),
        Commands::Analytics => commands::analytics::handle(ctx, flags),
        Commands::Portal(args) => commands::portal::handle(args, ctx, flags),
    }
}
