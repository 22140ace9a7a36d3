use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use sight_core::responses::MergedResult;
use sight_search::SearchParams;

use super::AppState;

/// `GET /search?latitude=..&longitude=..`
///
/// Always 200. Bad input and store failures yield `[]`. A repeated key
/// resolves to its first value.
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<Vec<MergedResult>> {
    let params = match query {
        Ok(Query(pairs)) => SearchParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable search query");
            SearchParams::default()
        }
    };
    Json(state.search.search(&params).await)
}
