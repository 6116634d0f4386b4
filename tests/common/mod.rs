#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use store_hours_api::config::AppConfig;
use store_hours_api::{app, AppState};

pub const STORE_TIMES_FILE: &str = "store_times.json";
pub const STORE_OVERWRITES_FILE: &str = "store_overwrite.json";

/// Router over a private temp data directory
pub struct TestApp {
    pub dir: TempDir,
    pub config: AppConfig,
    router: Router,
}

impl TestApp {
    /// Both collections present and empty
    pub fn new() -> Result<Self> {
        Self::with_data(json!([]), json!([]))
    }

    pub fn with_data(store_times: Value, store_overwrites: Value) -> Result<Self> {
        let dir = tempfile::tempdir().context("failed to create temp dir")?;
        let app = Self::in_dir(dir)?;
        app.write_file(STORE_TIMES_FILE, &store_times)?;
        app.write_file(STORE_OVERWRITES_FILE, &store_overwrites)?;
        Ok(app)
    }

    /// No data files at all
    pub fn empty_dir() -> Result<Self> {
        let dir = tempfile::tempdir().context("failed to create temp dir")?;
        Self::in_dir(dir)
    }

    fn in_dir(dir: TempDir) -> Result<Self> {
        let config = AppConfig::with_data_dir(dir.path());
        let state = AppState::from_config(config.clone())?;
        Ok(Self {
            dir,
            config,
            router: app(state),
        })
    }

    pub fn write_file(&self, name: &str, value: &Value) -> Result<()> {
        std::fs::write(self.dir.path().join(name), serde_json::to_vec_pretty(value)?)?;
        Ok(())
    }

    pub fn read_file(&self, name: &str) -> Result<Value> {
        let raw = std::fs::read(self.dir.path().join(name))?;
        Ok(serde_json::from_slice(&raw)?)
    }

    pub async fn get(&self, uri: &str) -> Result<(StatusCode, Value)> {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
        self.send(Method::POST, uri, Some(body), None).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
        self.send(Method::PUT, uri, Some(body), None).await
    }

    pub async fn delete(&self, uri: &str) -> Result<(StatusCode, Value)> {
        self.send(Method::DELETE, uri, None, None).await
    }

    pub async fn get_with_auth(&self, uri: &str, authorization: &str) -> Result<(StatusCode, Value)> {
        self.send(Method::GET, uri, None, Some(authorization)).await
    }

    pub async fn send_raw(&self, request: Request<Body>) -> Result<axum::response::Response> {
        Ok(self.router.clone().oneshot(request).await?)
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(authorization) = authorization {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.send_raw(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .with_context(|| format!("non-JSON body: {}", String::from_utf8_lossy(&bytes)))?
        };
        Ok((status, value))
    }
}

pub fn store_time(id: &str, day_of_week: i32, is_open: bool) -> Value {
    json!({
        "id": id,
        "day_of_week": day_of_week,
        "is_open": is_open,
        "start_time": if is_open { json!("09:00") } else { Value::Null },
        "end_time": if is_open { json!("18:00") } else { Value::Null },
    })
}

pub fn store_overwrite(id: &str, month: i32, day: i32, is_open: bool) -> Value {
    json!({
        "id": id,
        "day": day,
        "month": month,
        "is_open": is_open,
        "start_time": "10:00",
        "end_time": "15:00",
    })
}
