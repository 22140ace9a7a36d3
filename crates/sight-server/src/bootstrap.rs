use std::path::Path;

use sight_config::SightingsConfig;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SIGHTINGS_LOG";

/// Load layered configuration, including `.env` in the working directory.
///
/// # Errors
///
/// Returns an error if any source fails to parse or a value is invalid.
pub fn load_config(extra: Option<&Path>) -> anyhow::Result<SightingsConfig> {
    SightingsConfig::load_with_dotenv(extra).map_err(anyhow::Error::from)
}

/// Install the global `tracing` subscriber.
///
/// `SIGHTINGS_LOG` wins when set; otherwise `--quiet` / `--verbose` pick
/// the level.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level(quiet, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

const fn default_level(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}
