mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{count_rows, delete, get, post, seed_basic, test_app};

#[tokio::test]
async fn create_signup_returns_nested_parents() {
    let (app, _pool) = test_app().await;
    post(&app, "/campers", json!({"name": "Max", "age": 10})).await;
    post(&app, "/activities", json!({"name": "Archery", "difficulty": 2})).await;

    let res = post(&app, "/signups", json!({"time": 9, "camper_id": 1, "activity_id": 1})).await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(
        res.json,
        json!({
            "id": 1,
            "time": 9,
            "camper_id": 1,
            "activity_id": 1,
            "camper": {"id": 1, "name": "Max", "age": 10},
            "activity": {"id": 1, "name": "Archery", "difficulty": 2}
        })
    );
}

#[tokio::test]
async fn create_signup_rejects_out_of_range_time() {
    let (app, pool) = test_app().await;
    post(&app, "/campers", json!({"name": "Max", "age": 10})).await;
    post(&app, "/activities", json!({"name": "Archery", "difficulty": 2})).await;

    for time in [24, 25, -1] {
        let res =
            post(&app, "/signups", json!({"time": time, "camper_id": 1, "activity_id": 1})).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json, json!({"errors": ["validation errors"]}));
    }
    for time in [0, 23] {
        let res =
            post(&app, "/signups", json!({"time": time, "camper_id": 1, "activity_id": 1})).await;
        assert_eq!(res.status, StatusCode::CREATED);
    }
    assert_eq!(count_rows(&pool, "signups").await, 2);
}

#[tokio::test]
async fn create_signup_with_time_25_and_no_parents_is_rejected() {
    let (app, _pool) = test_app().await;
    let res = post(&app, "/signups", json!({"time": 25, "camper_id": 1, "activity_id": 1})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json, json!({"errors": ["validation errors"]}));
}

#[tokio::test]
async fn create_signup_requires_existing_parents() {
    let (app, pool) = test_app().await;
    post(&app, "/campers", json!({"name": "Max", "age": 10})).await;
    post(&app, "/activities", json!({"name": "Archery", "difficulty": 2})).await;

    for body in [
        json!({"time": 9, "camper_id": 99, "activity_id": 1}),
        json!({"time": 9, "camper_id": 1, "activity_id": 99}),
        json!({"time": 9, "activity_id": 1}),
        json!({"time": 9, "camper_id": 1}),
    ] {
        let res = post(&app, "/signups", body).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json, json!({"errors": ["validation errors"]}));
    }
    assert_eq!(count_rows(&pool, "signups").await, 0);
}

#[tokio::test]
async fn list_and_fetch_signups() {
    let (app, _pool) = test_app().await;
    seed_basic(&app).await;

    let res = get(&app, "/signups").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json.as_array().unwrap().len(), 3);
    assert_eq!(
        res.json[2],
        json!({"id": 3, "time": 10, "camper_id": 2, "activity_id": 1})
    );

    let res = get(&app, "/signups/2").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["camper"]["name"], "Max");
    assert_eq!(res.json["activity"]["name"], "Swimming");
    assert!(res.json["camper"].get("signups").is_none());

    let res = get(&app, "/signups/50").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json, json!({"error": "Signup not found"}));
}

#[tokio::test]
async fn delete_signup_leaves_parents() {
    let (app, pool) = test_app().await;
    seed_basic(&app).await;

    let res = delete(&app, "/signups/1").await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert_eq!(count_rows(&pool, "signups").await, 2);
    assert_eq!(count_rows(&pool, "campers").await, 2);
    assert_eq!(count_rows(&pool, "activities").await, 2);

    let res = delete(&app, "/signups/1").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
