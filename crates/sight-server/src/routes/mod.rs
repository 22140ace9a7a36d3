//! HTTP route handlers and router configuration

mod health;
mod records;
mod search;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

/// Shared handler state.
pub type AppState = Arc<AppContext>;

/// Build the application router.
///
/// Record routes live under `/api/collections/<collection>/records`; any path
/// no route claims is served from the static directory.
pub fn build_router(state: AppState) -> Router {
    let collection = format!("/api/collections/{}/records", state.config.primary.collection);
    let record = format!("{collection}/:id");
    let static_files = ServeDir::new(state.config.server.static_dir());

    Router::new()
        .route("/health", get(health::health))
        .route("/search", get(search::search))
        .route(&collection, get(records::list).post(records::create))
        .route(
            &record,
            get(records::get)
                .patch(records::update)
                .delete(records::delete),
        )
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
