use sqlx::SqlitePool;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  id INTEGER NOT NULL,
  name VARCHAR,
  difficulty INTEGER,
  CONSTRAINT pk_activities PRIMARY KEY (id)
)
"#;

const SQL_CREATE_CAMPERS: &str = r#"
CREATE TABLE IF NOT EXISTS campers (
  id INTEGER NOT NULL,
  name VARCHAR NOT NULL,
  age INTEGER NOT NULL,
  CONSTRAINT pk_campers PRIMARY KEY (id)
)
"#;

const SQL_CREATE_SIGNUPS: &str = r#"
CREATE TABLE IF NOT EXISTS signups (
  id INTEGER NOT NULL,
  time INTEGER NOT NULL,
  camper_id INTEGER NOT NULL,
  activity_id INTEGER NOT NULL,
  CONSTRAINT pk_signups PRIMARY KEY (id),
  CONSTRAINT fk_signups_camper_id_campers
    FOREIGN KEY (camper_id) REFERENCES campers (id) ON DELETE CASCADE,
  CONSTRAINT fk_signups_activity_id_activities
    FOREIGN KEY (activity_id) REFERENCES activities (id) ON DELETE CASCADE
)
"#;

const SQL_INDEX_SIGNUPS_CAMPER: &str =
    "CREATE INDEX IF NOT EXISTS ix_signups_camper_id ON signups (camper_id)";
const SQL_INDEX_SIGNUPS_ACTIVITY: &str =
    "CREATE INDEX IF NOT EXISTS ix_signups_activity_id ON signups (activity_id)";

/// Creates the three tables if they do not exist yet. Safe to run on every start.
pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    for sql in [
        SQL_CREATE_ACTIVITIES,
        SQL_CREATE_CAMPERS,
        SQL_CREATE_SIGNUPS,
        SQL_INDEX_SIGNUPS_CAMPER,
        SQL_INDEX_SIGNUPS_ACTIVITY,
    ] {
        sqlx::query(sql).execute(&mut *tx).await?;
    }
    tx.commit().await
}

/// Removes every row from all three tables, children first.
pub async fn clear_all(pool: &SqlitePool) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    for sql in [
        "DELETE FROM signups",
        "DELETE FROM campers",
        "DELETE FROM activities",
    ] {
        sqlx::query(sql).execute(&mut *tx).await?;
    }
    tx.commit().await
}
