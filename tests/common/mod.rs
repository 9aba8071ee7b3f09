#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use camp::database::{self, schema};

pub async fn test_pool() -> SqlitePool {
    let pool = database::connect_in_memory().await.unwrap();
    schema::ensure_schema(&pool).await.unwrap();
    pool
}

pub async fn test_app() -> (Router, SqlitePool) {
    let pool = test_pool().await;
    (camp::web::router(pool.clone()), pool)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub raw: String,
    pub json: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    send_request(app, builder.body(body).unwrap()).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let raw = String::from_utf8(bytes.to_vec()).unwrap();
    // Extractor rejections answer in plain text; those keep `json` as Null.
    let json = serde_json::from_str(&raw).unwrap_or(Value::Null);
    TestResponse { status, raw, json }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Camper 1 (Max) and 2 (Ava), activity 1 (Archery) and 2 (Swimming),
/// signups: Max→Archery, Max→Swimming, Ava→Archery.
pub async fn seed_basic(app: &Router) {
    post(app, "/campers", serde_json::json!({"name": "Max", "age": 10})).await;
    post(app, "/campers", serde_json::json!({"name": "Ava", "age": 12})).await;
    post(app, "/activities", serde_json::json!({"name": "Archery", "difficulty": 2})).await;
    post(app, "/activities", serde_json::json!({"name": "Swimming", "difficulty": 3})).await;
    for (camper_id, activity_id, time) in [(1, 1, 9), (1, 2, 14), (2, 1, 10)] {
        let res = post(
            app,
            "/signups",
            serde_json::json!({"time": time, "camper_id": camper_id, "activity_id": activity_id}),
        )
        .await;
        assert_eq!(res.status, StatusCode::CREATED);
    }
}
