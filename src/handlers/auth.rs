// handlers/auth.rs - POST /auth and GET /auth/verify
//
// Demo authentication against a single directory user. Tokens are stateless
// HS256 JWTs; nothing about a session is kept server-side.

use axum::extract::{Extension, State};
use serde::{Deserialize, Serialize};

use crate::api::JsonBody;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::VerifiedUser;
use crate::state::AppState;
use crate::validation::{FieldErrors, Validate, ValidationError};

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

impl Validate for Credentials {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = FieldErrors::new();
        if let Err(msg) = validate_email_format(&self.email) {
            errors.add("email", msg);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
            );
        }
        errors.into_result("Invalid credentials format")
    }
}

/// Basic email shape check: one `@` with non-empty local part and a dotted domain
fn validate_email_format(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err("Invalid email format".to_string());
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// POST /auth - exchange email and password for a one-hour token
pub async fn login(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> ApiResult<TokenResponse> {
    credentials.validate()?;
    let token = state.auth.login(&credentials.email, &credentials.password)?;
    Ok(ApiResponse::success(TokenResponse { token }))
}

/// GET /auth/verify - claims of the bearer token checked by `jwt_auth_middleware`
pub async fn verify(Extension(user): Extension<VerifiedUser>) -> ApiResult<VerifiedUser> {
    Ok(ApiResponse::success(user))
}
