use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub security: SecurityConfig,
    pub docs: DocsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub store_times_file: String,
    pub store_overwrites_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    pub username: String,
    pub password: String,
    /// Host label advertised in the API description
    pub host: String,
}

const DEFAULT_JWT_SECRET: &str = "your-super-secret-key-change-this-in-production";
const MAX_JWT_EXPIRY_SECS: u64 = 365 * 24 * 60 * 60;

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Storage overrides
        if let Ok(v) = env::var("DATA_DIR") {
            self.storage.data_dir = PathBuf::from(v);
        }
        if let Ok(v) = env::var("STORE_TIMES_FILE") {
            self.storage.store_times_file = v;
        }
        if let Ok(v) = env::var("STORE_OVERWRITES_FILE") {
            self.storage.store_overwrites_file = v;
        }

        // Security overrides
        if let Ok(v) = env::var("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("JWT_EXPIRY_SECS") {
            self.security.jwt_expiry_secs =
                parse_expiry_secs(&v).unwrap_or(self.security.jwt_expiry_secs);
        }

        // Docs overrides
        if let Ok(v) = env::var("DOCS_USERNAME") {
            self.docs.username = v;
        }
        if let Ok(v) = env::var("DOCS_PASSWORD") {
            self.docs.password = v;
        }
        if let Ok(v) = env::var("PRODUCTION_HOST") {
            self.docs.host = v;
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            storage: StorageConfig::default(),
            security: SecurityConfig {
                jwt_secret: DEFAULT_JWT_SECRET.to_string(),
                jwt_expiry_secs: 60 * 60, // 1 hour
            },
            docs: DocsConfig {
                username: "admin".to_string(),
                password: "admin".to_string(),
                host: "localhost:3000".to_string(),
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            docs: DocsConfig {
                host: "staging.example.com".to_string(),
                ..Self::development().docs
            },
            ..Self::development()
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            docs: DocsConfig {
                host: "api.example.com".to_string(),
                ..Self::development().docs
            },
            ..Self::development()
        }
    }

    /// Full path of the store-times collection file
    pub fn store_times_path(&self) -> PathBuf {
        self.storage.data_dir.join(&self.storage.store_times_file)
    }

    /// Full path of the store-overwrites collection file
    pub fn store_overwrites_path(&self) -> PathBuf {
        self.storage.data_dir.join(&self.storage.store_overwrites_file)
    }

    pub fn uses_default_jwt_secret(&self) -> bool {
        self.security.jwt_secret == DEFAULT_JWT_SECRET
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Development config rooted at an arbitrary data directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::development();
        config.storage.data_dir = data_dir.into();
        config
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            store_times_file: "store_times.json".to_string(),
            store_overwrites_file: "store_overwrite.json".to_string(),
        }
    }
}

/// Token lifetime from the environment: 1 second up to one year, otherwise ignored
fn parse_expiry_secs(raw: &str) -> Option<u64> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| (1..=MAX_JWT_EXPIRY_SECS).contains(secs))
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[macro_export]
macro_rules! is_production {
    () => {
        matches!($crate::config::CONFIG.environment, $crate::config::Environment::Production)
    };
}
