//! Subcommand handlers.

pub mod check;
pub mod serve;

use sight_config::SightingsConfig;

use crate::cli::Commands;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns whatever the handler returns.
pub async fn dispatch(command: Commands, config: SightingsConfig) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => serve::handle(&args, config).await,
        Commands::Check => check::handle(config).await,
    }
}
