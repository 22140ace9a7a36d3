use anyhow::Context;
use sight_config::SightingsConfig;
use sight_sync::consistency_report;

use crate::context::AppContext;

/// Print the cross-store consistency report as JSON.
///
/// Report only: nothing is deleted or rewritten.
///
/// # Errors
///
/// Returns an error if either store cannot be opened or scanned.
pub async fn handle(config: SightingsConfig) -> anyhow::Result<()> {
    let ctx = AppContext::init(config)
        .await
        .context("failed to initialize application context")?;

    let report = consistency_report(ctx.primary.as_ref(), ctx.spatial.as_ref())
        .await
        .context("consistency check failed")?;

    if !report.is_consistent() {
        tracing::warn!(
            orphan_points = report.orphan_points.len(),
            missing_points = report.missing_points.len(),
            "stores have diverged"
        );
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
