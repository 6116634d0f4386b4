// handlers/mod.rs - HTTP handlers, one module per resource
//
// Handlers stay thin: extract and parse input, call the matching service,
// wrap the result in an ApiResponse. Storage and merge logic live in services.

pub mod auth;
pub mod root;
pub mod store_overwrites;
pub mod store_times;

use crate::error::ApiError;

/// Parse an integer path segment, rejecting anything non-numeric with 400
pub(crate) fn parse_path_int(name: &str, raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ApiError::bad_request(format!("Path parameter '{}' must be an integer", name)))
}
