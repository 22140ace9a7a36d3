use std::sync::Arc;

use anyhow::Context;
use sight_config::SightingsConfig;

use crate::cli::ServeArgs;
use crate::context::AppContext;
use crate::routes::build_router;

/// Open both stores and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the stores cannot be opened or the listener cannot bind.
pub async fn handle(args: &ServeArgs, mut config: SightingsConfig) -> anyhow::Result<()> {
    if let Some(listen) = &args.listen {
        config.server.listen.clone_from(listen);
    }
    let addr = config.server.listen_addr()?;

    let ctx = AppContext::init(config)
        .await
        .context("failed to initialize application context")?;
    let app = build_router(Arc::new(ctx));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "sightd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("sightd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c; shutting down");
    }
}
