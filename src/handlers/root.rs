// handlers/root.rs - GET / route catalog, GET /health, GET /docs

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::api::openapi_document;
use crate::services::RecordError;
use crate::state::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Store Hours API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "[GET] /store-times": "Get all store times",
            "[GET] /store-times/:id": "Get a store time by id",
            "[GET] /store-times/day/:day_of_week": "Get store times for a day of the week (0-6)",
            "[POST] /store-times": "Create a new store time",
            "[PUT] /store-times/:id": "Update a store time by id",
            "[DELETE] /store-times/:id": "Delete a store time by id",
            "[GET] /store-overwrites": "Get all store overwrites",
            "[GET] /store-overwrites/:id": "Get a store overwrite by id",
            "[GET] /store-overwrites/date/:month/:day": "Get store overwrites for a date",
            "[POST] /store-overwrites": "Create a new store overwrite",
            "[PUT] /store-overwrites/:id": "Update a store overwrite by id",
            "[DELETE] /store-overwrites/:id": "Delete a store overwrite by id",
            "[POST] /auth": "Authenticate and receive a JWT",
            "[GET] /auth/verify": "Verify a bearer token",
            "[GET] /docs": "API description (basic auth)"
        }
    }))
}

/// Liveness plus a readability check of both data files.
/// Failure detail is logged; clients only see "unavailable".
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();
    let store_times = check(state.store_times.list().await.map(|_| ()), state.store_times.location());
    let store_overwrites = check(
        state.store_overwrites.list().await.map(|_| ()),
        state.store_overwrites.location(),
    );

    let healthy = store_times == "ok" && store_overwrites == "ok";
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if healthy { "ok" } else { "degraded" },
            "timestamp": now,
            "storage": {
                "store_times": store_times,
                "store_overwrites": store_overwrites
            }
        })),
    )
}

fn check(result: Result<(), RecordError>, location: String) -> &'static str {
    match result {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(store = %location, "health check failed: {}", e);
            "unavailable"
        }
    }
}

/// GET /docs - behind `docs_auth_middleware`
pub async fn docs(State(state): State<AppState>) -> Json<Value> {
    Json(openapi_document(&state.config.docs.host))
}
