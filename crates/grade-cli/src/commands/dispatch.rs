use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Setup => commands::setup::handle(ctx, flags).await,
        Commands::Create(args) => commands::grade::create(&args, ctx, flags).await,
        Commands::Get(args) => commands::grade::get(&args, ctx, flags).await,
        Commands::Delete(args) => commands::grade::delete(&args, ctx, flags).await,
        Commands::AddScore(args) => commands::grade::add_score(&args, ctx, flags).await,
        Commands::RemoveScore(args) => commands::grade::remove_score(&args, ctx, flags).await,
        Commands::Learner(args) => commands::learner::list(&args, ctx, flags).await,
        Commands::DeleteLearner(args) => commands::learner::delete(&args, ctx, flags).await,
        Commands::Class(args) => commands::class::list(&args, ctx, flags).await,
        Commands::MoveClass(args) => commands::class::move_class(&args, ctx, flags).await,
        Commands::DeleteClass(args) => commands::class::delete(&args, ctx, flags).await,
        Commands::Stats(args) => commands::stats::handle(&args, ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
