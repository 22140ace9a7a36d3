use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `sightd` binary.
#[derive(Debug, Parser)]
#[command(name = "sightd", version, about = "Sightings service - records with a spatial index")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file, merged above ./sightings.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open both stores and serve the HTTP API
    Serve(ServeArgs),
    /// Compare the key sets of both stores and print the divergence as JSON
    Check,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Override `server.listen`
    #[arg(long)]
    pub listen: Option<String>,
}
