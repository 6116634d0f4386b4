// handlers/store_overwrites.rs - /store-overwrites resource handlers

use axum::extract::{Path, State};
use serde_json::{json, Value};

use super::parse_path_int;
use crate::api::JsonBody;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{NewStoreOverwrite, StoreOverwrite, StoreOverwritePatch};
use crate::state::AppState;

/// GET /store-overwrites
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<StoreOverwrite>> {
    Ok(ApiResponse::success(state.store_overwrites.list().await?))
}

/// GET /store-overwrites/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StoreOverwrite> {
    Ok(ApiResponse::success(state.store_overwrites.get(&id).await?))
}

/// GET /store-overwrites/date/:month/:day
///
/// Out-of-range numbers are not rejected; they simply match nothing.
pub async fn by_date(
    State(state): State<AppState>,
    Path((month, day)): Path<(String, String)>,
) -> ApiResult<Vec<StoreOverwrite>> {
    let month = parse_path_int("month", &month)?;
    let day = parse_path_int("day", &day)?;
    let matches = state
        .store_overwrites
        .find_where(|overwrite| overwrite.month == month && overwrite.day == day)
        .await?;
    Ok(ApiResponse::success(matches))
}

/// POST /store-overwrites
pub async fn create(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<NewStoreOverwrite>,
) -> ApiResult<StoreOverwrite> {
    Ok(ApiResponse::created(state.store_overwrites.create(draft).await?))
}

/// PUT /store-overwrites/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<StoreOverwritePatch>,
) -> ApiResult<StoreOverwrite> {
    Ok(ApiResponse::success(state.store_overwrites.update(&id, patch).await?))
}

/// DELETE /store-overwrites/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    state.store_overwrites.delete(&id).await?;
    Ok(ApiResponse::success(json!({ "message": "Deleted" })))
}
