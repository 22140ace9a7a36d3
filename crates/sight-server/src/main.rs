use clap::Parser;

use sight_server::{bootstrap, cli, commands};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("sightd error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    bootstrap::init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(cli.config.as_deref())?;
    commands::dispatch(cli.command, config).await
}
