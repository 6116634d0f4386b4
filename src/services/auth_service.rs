use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::password::verify_password;
use crate::auth::{AuthError, JwtKeys, UserDirectory, UserProfile};

/// Token claims plus the directory profile of the user they name
#[derive(Debug, Clone, Serialize)]
pub struct VerifiedUser {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

/// Stateless credential check and token issuance
#[derive(Clone)]
pub struct AuthService {
    directory: Arc<dyn UserDirectory>,
    keys: JwtKeys,
}

impl AuthService {
    pub fn new(directory: Arc<dyn UserDirectory>, keys: JwtKeys) -> Self {
        Self { directory, keys }
    }

    /// Unknown email and wrong password are indistinguishable to the caller
    pub fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let Some(user) = self.directory.find_by_email(email) else {
            warn!("login attempt for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash) {
            warn!(email, "login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.keys.issue(&user.email)?;
        info!(email, "issued token");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<VerifiedUser, AuthError> {
        let claims = self.keys.verify(token)?;
        let profile = self
            .directory
            .find_by_email(&claims.email)
            .map(|user| user.profile);

        Ok(VerifiedUser {
            email: claims.email,
            iat: claims.iat,
            exp: claims.exp,
            profile,
        })
    }
}
