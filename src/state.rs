use std::sync::Arc;

use crate::auth::{AuthError, JwtKeys, StaticUserDirectory, UserDirectory};
use crate::config::AppConfig;
use crate::database::{JsonFileStore, RecordStore};
use crate::models::{StoreOverwrite, StoreTime};
use crate::services::{AuthService, RecordService};

/// Shared, immutable per-process state handed to every handler.
/// Records themselves are never cached here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store_times: RecordService<StoreTime>,
    pub store_overwrites: RecordService<StoreOverwrite>,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store_times: Arc<dyn RecordStore<StoreTime>>,
        store_overwrites: Arc<dyn RecordStore<StoreOverwrite>>,
        directory: Arc<dyn UserDirectory>,
    ) -> Result<Self, AuthError> {
        let keys = JwtKeys::new(&config.security.jwt_secret, config.security.jwt_expiry_secs)?;

        Ok(Self {
            config: Arc::new(config),
            store_times: RecordService::new(store_times),
            store_overwrites: RecordService::new(store_overwrites),
            auth: AuthService::new(directory, keys),
        })
    }

    /// JSON files under the configured data directory and the demo user
    pub fn from_config(config: AppConfig) -> Result<Self, AuthError> {
        let store_times = Arc::new(JsonFileStore::<StoreTime>::new(config.store_times_path()));
        let store_overwrites =
            Arc::new(JsonFileStore::<StoreOverwrite>::new(config.store_overwrites_path()));
        let directory = Arc::new(StaticUserDirectory::demo()?);

        Self::new(config, store_times, store_overwrites, directory)
    }
}
