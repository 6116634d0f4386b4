// handlers/store_times.rs - /store-times resource handlers

use axum::extract::{Path, State};
use serde_json::{json, Value};

use super::parse_path_int;
use crate::api::JsonBody;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{NewStoreTime, StoreTime, StoreTimePatch};
use crate::state::AppState;

/// GET /store-times - all store times in stored order
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<StoreTime>> {
    Ok(ApiResponse::success(state.store_times.list().await?))
}

/// GET /store-times/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<StoreTime> {
    Ok(ApiResponse::success(state.store_times.get(&id).await?))
}

/// GET /store-times/day/:day_of_week - every rule for that weekday, 404 when none
pub async fn by_day(
    State(state): State<AppState>,
    Path(day_of_week): Path<String>,
) -> ApiResult<Vec<StoreTime>> {
    let day_of_week = parse_path_int("day_of_week", &day_of_week)?;
    let matches = state
        .store_times
        .find_where(|time| time.day_of_week == day_of_week)
        .await?;
    Ok(ApiResponse::success(matches))
}

/// POST /store-times
pub async fn create(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<NewStoreTime>,
) -> ApiResult<StoreTime> {
    Ok(ApiResponse::created(state.store_times.create(draft).await?))
}

/// PUT /store-times/:id - partial update
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<StoreTimePatch>,
) -> ApiResult<StoreTime> {
    Ok(ApiResponse::success(state.store_times.update(&id, patch).await?))
}

/// DELETE /store-times/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    state.store_times.delete(&id).await?;
    Ok(ApiResponse::success(json!({ "message": "Deleted" })))
}
