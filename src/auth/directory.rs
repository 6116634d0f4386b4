use serde::{Deserialize, Serialize};

use super::password::hash_password;
use super::AuthError;

pub const DEMO_EMAIL: &str = "user@tryperdiem.com";
pub const DEMO_PASSWORD: &str = "password";

/// Profile fields reported alongside verified token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub email: String,
    pub password_hash: String,
    pub profile: UserProfile,
}

/// Read-only credential lookup
pub trait UserDirectory: Send + Sync {
    fn find_by_email(&self, email: &str) -> Option<UserRecord>;
}

/// Directory holding exactly one user
pub struct StaticUserDirectory {
    user: UserRecord,
}

impl StaticUserDirectory {
    pub fn new(email: &str, password: &str, profile: UserProfile) -> Result<Self, AuthError> {
        Ok(Self {
            user: UserRecord {
                email: email.to_string(),
                password_hash: hash_password(password)?,
                profile,
            },
        })
    }

    /// The built-in demonstration account
    pub fn demo() -> Result<Self, AuthError> {
        Self::new(
            DEMO_EMAIL,
            DEMO_PASSWORD,
            UserProfile {
                name: "Demo User".to_string(),
                role: "admin".to_string(),
                permissions: vec![
                    "store-times:read".to_string(),
                    "store-times:write".to_string(),
                    "store-overwrites:read".to_string(),
                    "store-overwrites:write".to_string(),
                ],
            },
        )
    }
}

impl UserDirectory for StaticUserDirectory {
    fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        (self.user.email == email).then(|| self.user.clone())
    }
}
