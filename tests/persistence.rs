mod common;

use camp::database::{activity_repo, camper_repo, signup_repo};
use camp::services::activity_service::{self, NewActivityInput};
use camp::services::camper_service::{self, CamperPatch, NewCamperInput};
use camp::services::signup_service::{self, NewSignupInput};
use camp::CampError;

use common::{count_rows, test_pool};

fn camper(name: &str, age: i64) -> NewCamperInput {
    NewCamperInput {
        name: Some(name.to_string()),
        age: Some(age),
    }
}

fn activity(name: &str, difficulty: i64) -> NewActivityInput {
    NewActivityInput {
        name: Some(name.to_string()),
        difficulty: Some(difficulty),
    }
}

fn signup(time: i64, camper_id: i64, activity_id: i64) -> NewSignupInput {
    NewSignupInput {
        time: Some(time),
        camper_id: Some(camper_id),
        activity_id: Some(activity_id),
    }
}

#[tokio::test]
async fn age_range_decides_every_camper_write() {
    let pool = test_pool().await;
    let mut accepted = 0;
    for age in 0..=30 {
        let result = camper_service::create_camper(&pool, camper("Kid", age)).await;
        if (8..=18).contains(&age) {
            assert!(result.is_ok(), "age {} should be accepted", age);
            accepted += 1;
        } else {
            assert!(matches!(result, Err(CampError::Validation(_))));
        }
    }
    assert_eq!(count_rows(&pool, "campers").await, accepted);
}

#[tokio::test]
async fn failed_update_rolls_back_whole_write() {
    let pool = test_pool().await;
    let created = camper_service::create_camper(&pool, camper("Max", 10)).await.unwrap();

    let patch: CamperPatch = serde_json::from_str(r#"{"name": "Other", "age": 30}"#).unwrap();
    let err = camper_service::update_camper(&pool, created.id, patch)
        .await
        .unwrap_err();
    assert!(matches!(err, CampError::Validation(_)));

    let mut conn = pool.acquire().await.unwrap();
    let row = camper_repo::load_camper_by_id(&mut conn, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.name, "Max");
    assert_eq!(row.age, 10);
}

#[tokio::test]
async fn signup_with_missing_parent_writes_nothing() {
    let pool = test_pool().await;
    let c = camper_service::create_camper(&pool, camper("Max", 10)).await.unwrap();

    let err = signup_service::create_signup(&pool, signup(9, c.id, 404))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "validation errors");
    assert_eq!(count_rows(&pool, "signups").await, 0);
}

#[tokio::test]
async fn deleting_parents_cascades_to_signups() {
    let pool = test_pool().await;
    let max = camper_service::create_camper(&pool, camper("Max", 10)).await.unwrap();
    let ava = camper_service::create_camper(&pool, camper("Ava", 12)).await.unwrap();
    let archery = activity_service::create_activity(&pool, activity("Archery", 2)).await.unwrap();
    let hiking = activity_service::create_activity(&pool, activity("Hiking", 4)).await.unwrap();

    for (c, a, t) in [(max.id, archery.id, 9), (max.id, hiking.id, 11), (ava.id, hiking.id, 13)] {
        signup_service::create_signup(&pool, signup(t, c, a)).await.unwrap();
    }

    activity_service::delete_activity(&pool, hiking.id).await.unwrap();
    let mut conn = pool.acquire().await.unwrap();
    assert!(signup_repo::list_signups_for_activity(&mut conn, hiking.id)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(signup_repo::list_signups(&mut conn).await.unwrap().len(), 1);
    drop(conn);

    camper_service::delete_camper(&pool, max.id).await.unwrap();
    assert_eq!(count_rows(&pool, "signups").await, 0);
    assert_eq!(count_rows(&pool, "campers").await, 1);

    let mut conn = pool.acquire().await.unwrap();
    assert!(activity_repo::load_activity_by_id(&mut conn, archery.id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn foreign_keys_cascade_at_the_store_level() {
    let pool = test_pool().await;
    let c = camper_service::create_camper(&pool, camper("Max", 10)).await.unwrap();
    let a = activity_service::create_activity(&pool, activity("Archery", 2)).await.unwrap();
    signup_service::create_signup(&pool, signup(9, c.id, a.id)).await.unwrap();

    let mut conn = pool.acquire().await.unwrap();
    activity_repo::delete_activity(&mut conn, a.id).await.unwrap();
    assert_eq!(signup_repo::list_signups(&mut conn).await.unwrap().len(), 0);
}
