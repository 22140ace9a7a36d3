//! Cross-store key comparison.
//!
//! Nothing in the write paths reconciles the two stores after a partial
//! failure. This report makes the divergence visible; repairing it is left to
//! an operator.

use std::collections::BTreeSet;

use sight_core::capability::{PrimaryStore, SpatialIndex};
use sight_core::responses::ConsistencyReport;

use crate::error::SyncError;

/// List keys present in only one of the two stores.
///
/// Both lists are sorted.
///
/// # Errors
///
/// Returns [`SyncError`] if either key scan fails.
pub async fn consistency_report(
    primary: &dyn PrimaryStore,
    spatial: &dyn SpatialIndex,
) -> Result<ConsistencyReport, SyncError> {
    let records: BTreeSet<String> = primary
        .list_ids()
        .await
        .map_err(SyncError::Primary)?
        .into_iter()
        .collect();
    let points: BTreeSet<String> = spatial
        .list_ids()
        .await
        .map_err(SyncError::Spatial)?
        .into_iter()
        .collect();

    let report = ConsistencyReport {
        orphan_points: points.difference(&records).cloned().collect(),
        missing_points: records.difference(&points).cloned().collect(),
    };
    tracing::info!(
        records = records.len(),
        points = points.len(),
        orphan_points = report.orphan_points.len(),
        missing_points = report.missing_points.len(),
        "consistency report computed"
    );
    Ok(report)
}
