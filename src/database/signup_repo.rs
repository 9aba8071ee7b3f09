use sqlx::SqliteConnection;

use crate::models::{ActivitySignupRow, CamperSignupRow, SignupRow};

const SQL_LIST_SIGNUPS: &str = r#"
SELECT id, time, camper_id, activity_id
FROM signups
ORDER BY id ASC
"#;

const SQL_LOAD_SIGNUP: &str = r#"
SELECT id, time, camper_id, activity_id
FROM signups
WHERE id = ?1
"#;

const SQL_LIST_SIGNUPS_FOR_CAMPER: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  a.name AS activity_name,
  a.difficulty AS activity_difficulty
FROM signups s
JOIN activities a ON a.id = s.activity_id
WHERE s.camper_id = ?1
ORDER BY s.id ASC
"#;

const SQL_LIST_SIGNUPS_FOR_ACTIVITY: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  c.name AS camper_name,
  c.age AS camper_age
FROM signups s
JOIN campers c ON c.id = s.camper_id
WHERE s.activity_id = ?1
ORDER BY s.id ASC
"#;

const SQL_INSERT_SIGNUP: &str = r#"
INSERT INTO signups (time, camper_id, activity_id) VALUES (?1, ?2, ?3)
"#;

const SQL_DELETE_SIGNUP: &str = r#"
DELETE FROM signups WHERE id = ?1
"#;

const SQL_DELETE_SIGNUPS_FOR_CAMPER: &str = r#"
DELETE FROM signups WHERE camper_id = ?1
"#;

const SQL_DELETE_SIGNUPS_FOR_ACTIVITY: &str = r#"
DELETE FROM signups WHERE activity_id = ?1
"#;

pub struct NewSignup {
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

pub async fn list_signups(conn: &mut SqliteConnection) -> sqlx::Result<Vec<SignupRow>> {
    sqlx::query_as::<_, SignupRow>(SQL_LIST_SIGNUPS)
        .fetch_all(conn)
        .await
}

pub async fn load_signup_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> sqlx::Result<Option<SignupRow>> {
    sqlx::query_as::<_, SignupRow>(SQL_LOAD_SIGNUP)
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn list_signups_for_camper(
    conn: &mut SqliteConnection,
    camper_id: i64,
) -> sqlx::Result<Vec<CamperSignupRow>> {
    sqlx::query_as::<_, CamperSignupRow>(SQL_LIST_SIGNUPS_FOR_CAMPER)
        .bind(camper_id)
        .fetch_all(conn)
        .await
}

pub async fn list_signups_for_activity(
    conn: &mut SqliteConnection,
    activity_id: i64,
) -> sqlx::Result<Vec<ActivitySignupRow>> {
    sqlx::query_as::<_, ActivitySignupRow>(SQL_LIST_SIGNUPS_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_all(conn)
        .await
}

pub async fn insert_signup(conn: &mut SqliteConnection, signup: NewSignup) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_SIGNUP)
        .bind(signup.time)
        .bind(signup.camper_id)
        .bind(signup.activity_id)
        .execute(conn)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn delete_signup(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_SIGNUP)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_signups_for_camper(
    conn: &mut SqliteConnection,
    camper_id: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_SIGNUPS_FOR_CAMPER)
        .bind(camper_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_signups_for_activity(
    conn: &mut SqliteConnection,
    activity_id: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_SIGNUPS_FOR_ACTIVITY)
        .bind(activity_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}
