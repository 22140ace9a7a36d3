//! CRUD handlers for the sightings collection.
//!
//! The create handler takes the raw body so the create-request hook can read
//! the coordinate the record schema does not carry.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use sight_core::entities::NewSighting;
use sight_core::responses::SightingRecord;
use sight_db::updates::sighting::SightingUpdate;

use super::AppState;
use crate::error::ApiError;

const DEFAULT_PAGE: u32 = 30;
const MAX_PAGE: u32 = 500;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<SightingRecord>>, ApiError> {
    let limit = params.per_page.unwrap_or(DEFAULT_PAGE).clamp(1, MAX_PAGE);
    Ok(Json(state.service.list_sightings(limit).await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SightingRecord>, ApiError> {
    Ok(Json(state.service.get_sighting(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SightingRecord>, ApiError> {
    let new: NewSighting = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Failed to create record: {e}")))?;
    Ok(Json(state.service.create_sighting(&new, &body).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SightingRecord>, ApiError> {
    let update: SightingUpdate = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Failed to update record: {e}")))?;
    Ok(Json(state.service.update_sighting(&id, update).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_sighting(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
