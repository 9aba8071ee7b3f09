use sqlx::SqliteConnection;

use crate::models::CamperRow;

const SQL_LIST_CAMPERS: &str = r#"
SELECT id, name, age
FROM campers
ORDER BY id ASC
"#;

const SQL_LOAD_CAMPER: &str = r#"
SELECT id, name, age
FROM campers
WHERE id = ?1
"#;

const SQL_INSERT_CAMPER: &str = r#"
INSERT INTO campers (name, age) VALUES (?1, ?2)
"#;

const SQL_UPDATE_CAMPER: &str = r#"
UPDATE campers
SET name = ?1, age = ?2
WHERE id = ?3
"#;

const SQL_DELETE_CAMPER: &str = r#"
DELETE FROM campers WHERE id = ?1
"#;

pub struct NewCamper<'a> {
    pub name: &'a str,
    pub age: i64,
}

pub async fn list_campers(conn: &mut SqliteConnection) -> sqlx::Result<Vec<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_LIST_CAMPERS)
        .fetch_all(conn)
        .await
}

pub async fn load_camper_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> sqlx::Result<Option<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_LOAD_CAMPER)
        .bind(id)
        .fetch_optional(conn)
        .await
}

/// Returns the generated id.
pub async fn insert_camper(conn: &mut SqliteConnection, camper: NewCamper<'_>) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_CAMPER)
        .bind(camper.name)
        .bind(camper.age)
        .execute(conn)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn update_camper(conn: &mut SqliteConnection, camper: &CamperRow) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_CAMPER)
        .bind(&camper.name)
        .bind(camper.age)
        .bind(camper.id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_camper(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_CAMPER)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}
