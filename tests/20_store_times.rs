mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{store_time, TestApp, STORE_TIMES_FILE};

fn week() -> serde_json::Value {
    json!([
        store_time("sun", 0, false),
        store_time("mon", 1, true),
        store_time("mon-late", 1, true),
        store_time("tue", 2, true),
    ])
}

#[tokio::test]
async fn list_returns_collection_in_stored_order() -> Result<()> {
    let app = TestApp::with_data(week(), json!([]))?;

    let (status, body) = app.get("/store-times").await?;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["sun", "mon", "mon-late", "tue"]);

    Ok(())
}

#[tokio::test]
async fn get_by_id_returns_bare_object() -> Result<()> {
    let app = TestApp::with_data(week(), json!([]))?;

    let (status, body) = app.get("/store-times/tue").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, store_time("tue", 2, true));

    let (status, body) = app.get("/store-times/nope").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not found");

    Ok(())
}

#[tokio::test]
async fn lookup_by_day_returns_all_matches() -> Result<()> {
    let app = TestApp::with_data(week(), json!([]))?;

    let (status, body) = app.get("/store-times/day/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([store_time("mon", 1, true), store_time("mon-late", 1, true)]));

    let (status, _) = app.get("/store-times/day/5").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/store-times/day/9").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.get("/store-times/day/monday").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    Ok(())
}

#[tokio::test]
async fn create_then_lookup_by_day() -> Result<()> {
    let app = TestApp::new()?;

    let (status, created) = app
        .post(
            "/store-times",
            json!({ "day_of_week": 1, "is_open": true, "start_time": "09:00", "end_time": "18:00" }),
        )
        .await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["day_of_week"], 1);
    assert_eq!(created["is_open"], true);
    assert_eq!(created["start_time"], "09:00");
    assert_eq!(created["end_time"], "18:00");

    let (status, body) = app.get("/store-times/day/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().iter().any(|t| t["id"] == id.as_str()));

    assert_eq!(app.read_file(STORE_TIMES_FILE)?, json!([created]));

    Ok(())
}

#[tokio::test]
async fn create_ignores_client_supplied_id() -> Result<()> {
    let app = TestApp::new()?;

    let (status, created) = app
        .post("/store-times", json!({ "id": "mine", "day_of_week": 0, "is_open": false }))
        .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["id"], "mine");
    assert_eq!(created["start_time"], serde_json::Value::Null);

    Ok(())
}

#[tokio::test]
async fn create_rejects_invalid_input_without_writing() -> Result<()> {
    let app = TestApp::with_data(week(), json!([]))?;
    let before = app.read_file(STORE_TIMES_FILE)?;

    let (status, body) = app
        .post("/store-times", json!({ "day_of_week": 7, "is_open": true }))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["day_of_week"].is_string());

    let (status, _) = app
        .post(
            "/store-times",
            json!({ "day_of_week": 2, "is_open": true, "start_time": "9am", "end_time": "18:00" }),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.post("/store-times", json!({ "is_open": true })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_JSON");

    assert_eq!(app.read_file(STORE_TIMES_FILE)?, before);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_400() -> Result<()> {
    use axum::body::Body;
    use axum::http::{header, Request};

    let app = TestApp::new()?;
    let request = Request::builder()
        .method("POST")
        .uri("/store-times")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ \"day_of_week\": "))?;

    let response = app.send_raw(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn update_is_partial_merge() -> Result<()> {
    let app = TestApp::with_data(week(), json!([]))?;

    let (status, updated) = app
        .put("/store-times/mon", json!({ "end_time": "21:00" }))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({
            "id": "mon",
            "day_of_week": 1,
            "is_open": true,
            "start_time": "09:00",
            "end_time": "21:00"
        })
    );

    let stored = app.read_file(STORE_TIMES_FILE)?;
    assert_eq!(stored[1], updated);
    assert_eq!(stored[0], store_time("sun", 0, false));

    Ok(())
}

#[tokio::test]
async fn update_can_close_a_day() -> Result<()> {
    let app = TestApp::with_data(week(), json!([]))?;

    let (status, updated) = app
        .put(
            "/store-times/tue",
            json!({ "is_open": false, "start_time": null, "end_time": null }),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, store_time("tue", 2, false));

    Ok(())
}

#[tokio::test]
async fn update_unknown_or_invalid() -> Result<()> {
    let app = TestApp::with_data(week(), json!([]))?;

    let (status, _) = app.put("/store-times/ghost", json!({ "is_open": true })).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.put("/store-times/mon", json!({ "day_of_week": -1 })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(app.read_file(STORE_TIMES_FILE)?, week());
    Ok(())
}

#[tokio::test]
async fn delete_removes_record_once() -> Result<()> {
    let app = TestApp::with_data(week(), json!([]))?;

    let (status, body) = app.delete("/store-times/mon").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Deleted" }));
    assert_eq!(app.read_file(STORE_TIMES_FILE)?.as_array().unwrap().len(), 3);

    let (status, body) = app.delete("/store-times/mon").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not found");
    assert_eq!(app.read_file(STORE_TIMES_FILE)?.as_array().unwrap().len(), 3);

    Ok(())
}

#[tokio::test]
async fn missing_data_file_is_a_server_error() -> Result<()> {
    let app = TestApp::empty_dir()?;

    let (status, body) = app.get("/store-times").await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].is_string());

    // Not recreated as a side effect
    let (status, _) = app
        .post("/store-times", json!({ "day_of_week": 1, "is_open": false }))
        .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!app.dir.path().join(STORE_TIMES_FILE).exists());

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_creates_all_succeed() -> Result<()> {
    let app = std::sync::Arc::new(TestApp::new()?);

    let mut tasks = tokio::task::JoinSet::new();
    for day_of_week in 0..16 {
        let app = app.clone();
        tasks.spawn(async move {
            app.post(
                "/store-times",
                json!({ "day_of_week": day_of_week % 7, "is_open": false }),
            )
            .await
        });
    }
    while let Some(joined) = tasks.join_next().await {
        let (status, body) = joined??;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
    }

    // Overlapping writers may drop each other's records, never corrupt the file
    let stored = app.read_file(STORE_TIMES_FILE)?;
    assert!(!stored.as_array().unwrap().is_empty());
    let leftovers = std::fs::read_dir(app.dir.path())?.count();
    assert_eq!(leftovers, 2);

    Ok(())
}
