use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;

use crate::database::{activity_repo, signup_repo};
use crate::error::{CampError, CampResult};
use crate::models::{ActivityRow, ActivitySignupRow};
use crate::services::camper_service::CamperSummaryView;
use crate::services::{abort, deserialize_present};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySummaryView {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}

impl From<ActivityRow> for ActivitySummaryView {
    fn from(row: ActivityRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            difficulty: row.difficulty,
        }
    }
}

/// Activity with its signups; nested signups carry the camper, never the
/// activity.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityDetailView {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
    pub signups: Vec<ActivitySignupView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivitySignupView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper: CamperSummaryView,
}

impl From<ActivitySignupRow> for ActivitySignupView {
    fn from(row: ActivitySignupRow) -> Self {
        Self {
            id: row.id,
            time: row.time,
            camper_id: row.camper_id,
            activity_id: row.activity_id,
            camper: CamperSummaryView {
                id: row.camper_id,
                name: row.camper_name,
                age: row.camper_age,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NewActivityInput {
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ActivityPatch {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub difficulty: Option<Option<i64>>,
}

pub async fn list_activities(pool: &SqlitePool) -> CampResult<Vec<ActivitySummaryView>> {
    let mut conn = pool.acquire().await?;
    let rows = activity_repo::list_activities(&mut conn).await?;
    Ok(rows.into_iter().map(ActivitySummaryView::from).collect())
}

pub async fn load_activity_detail(pool: &SqlitePool, id: i64) -> CampResult<ActivityDetailView> {
    let mut conn = pool.acquire().await?;
    let Some(row) = activity_repo::load_activity_by_id(&mut conn, id).await? else {
        return Err(CampError::NotFound("Activity"));
    };
    let signups = signup_repo::list_signups_for_activity(&mut conn, id).await?;

    Ok(ActivityDetailView {
        id: row.id,
        name: row.name,
        difficulty: row.difficulty,
        signups: signups.into_iter().map(ActivitySignupView::from).collect(),
    })
}

pub async fn create_activity(
    pool: &SqlitePool,
    input: NewActivityInput,
) -> CampResult<ActivitySummaryView> {
    let mut tx = pool.begin().await?;
    let id = activity_repo::insert_activity(
        &mut tx,
        activity_repo::NewActivity {
            name: input.name.as_deref(),
            difficulty: input.difficulty,
        },
    )
    .await?;
    tx.commit().await?;

    info!(activity_id = id, "activity created");
    Ok(ActivitySummaryView {
        id,
        name: input.name,
        difficulty: input.difficulty,
    })
}

pub async fn update_activity(
    pool: &SqlitePool,
    id: i64,
    patch: ActivityPatch,
) -> CampResult<ActivitySummaryView> {
    let mut tx = pool.begin().await?;
    let Some(mut row) = activity_repo::load_activity_by_id(&mut tx, id).await? else {
        return abort(tx, CampError::NotFound("Activity")).await;
    };

    if let Some(name) = patch.name {
        row.name = name;
    }
    if let Some(difficulty) = patch.difficulty {
        row.difficulty = difficulty;
    }

    activity_repo::update_activity(&mut tx, &row).await?;
    tx.commit().await?;

    info!(activity_id = id, "activity updated");
    Ok(row.into())
}

/// Deletes the activity and, in the same transaction, every signup referencing it.
pub async fn delete_activity(pool: &SqlitePool, id: i64) -> CampResult<()> {
    let mut tx = pool.begin().await?;
    if activity_repo::load_activity_by_id(&mut tx, id).await?.is_none() {
        return abort(tx, CampError::NotFound("Activity")).await;
    }

    let removed_signups = signup_repo::delete_signups_for_activity(&mut tx, id).await?;
    activity_repo::delete_activity(&mut tx, id).await?;
    tx.commit().await?;

    info!(activity_id = id, removed_signups, "activity deleted");
    Ok(())
}
