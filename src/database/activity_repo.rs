use sqlx::SqliteConnection;

use crate::models::ActivityRow;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT id, name, difficulty
FROM activities
ORDER BY id ASC
"#;

const SQL_LOAD_ACTIVITY: &str = r#"
SELECT id, name, difficulty
FROM activities
WHERE id = ?1
"#;

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (name, difficulty) VALUES (?1, ?2)
"#;

const SQL_UPDATE_ACTIVITY: &str = r#"
UPDATE activities
SET name = ?1, difficulty = ?2
WHERE id = ?3
"#;

const SQL_DELETE_ACTIVITY: &str = r#"
DELETE FROM activities WHERE id = ?1
"#;

pub struct NewActivity<'a> {
    pub name: Option<&'a str>,
    pub difficulty: Option<i64>,
}

pub async fn list_activities(conn: &mut SqliteConnection) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(conn)
        .await
}

pub async fn load_activity_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LOAD_ACTIVITY)
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn insert_activity(
    conn: &mut SqliteConnection,
    activity: NewActivity<'_>,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.difficulty)
        .execute(conn)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn update_activity(
    conn: &mut SqliteConnection,
    activity: &ActivityRow,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_ACTIVITY)
        .bind(activity.name.as_deref())
        .bind(activity.difficulty)
        .bind(activity.id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_activity(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ACTIVITY)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}
