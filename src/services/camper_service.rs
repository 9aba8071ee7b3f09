use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;

use crate::database::{camper_repo, signup_repo};
use crate::error::{CampError, CampResult};
use crate::models::validation::{validate_camper_age, validate_camper_name};
use crate::models::{CamperRow, CamperSignupRow};
use crate::services::activity_service::ActivitySummaryView;
use crate::services::{abort, deserialize_present};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CamperSummaryView {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<CamperRow> for CamperSummaryView {
    fn from(row: CamperRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            age: row.age,
        }
    }
}

/// Camper with its signups. Each signup carries its activity but not the
/// camper again.
#[derive(Debug, Clone, Serialize)]
pub struct CamperDetailView {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignupView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CamperSignupView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivitySummaryView,
}

impl From<CamperSignupRow> for CamperSignupView {
    fn from(row: CamperSignupRow) -> Self {
        Self {
            id: row.id,
            time: row.time,
            camper_id: row.camper_id,
            activity_id: row.activity_id,
            activity: ActivitySummaryView {
                id: row.activity_id,
                name: row.activity_name,
                difficulty: row.activity_difficulty,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NewCamperInput {
    pub name: Option<String>,
    pub age: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CamperPatch {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub age: Option<Option<i64>>,
}

pub async fn list_campers(pool: &SqlitePool) -> CampResult<Vec<CamperSummaryView>> {
    let mut conn = pool.acquire().await?;
    let rows = camper_repo::list_campers(&mut conn).await?;
    Ok(rows.into_iter().map(CamperSummaryView::from).collect())
}

pub async fn load_camper_detail(pool: &SqlitePool, id: i64) -> CampResult<CamperDetailView> {
    let mut conn = pool.acquire().await?;
    let Some(row) = camper_repo::load_camper_by_id(&mut conn, id).await? else {
        return Err(CampError::NotFound("Camper"));
    };
    let signups = signup_repo::list_signups_for_camper(&mut conn, id).await?;

    Ok(CamperDetailView {
        id: row.id,
        name: row.name,
        age: row.age,
        signups: signups.into_iter().map(CamperSignupView::from).collect(),
    })
}

pub async fn create_camper(
    pool: &SqlitePool,
    input: NewCamperInput,
) -> CampResult<CamperSummaryView> {
    let mut tx = pool.begin().await?;
    let (name, age) = match validate_new_camper(&input) {
        Ok(fields) => fields,
        Err(e) => return abort(tx, e).await,
    };

    let id = camper_repo::insert_camper(&mut tx, camper_repo::NewCamper { name: &name, age })
        .await?;
    tx.commit().await?;

    info!(camper_id = id, "camper created");
    Ok(CamperSummaryView { id, name, age })
}

pub async fn update_camper(
    pool: &SqlitePool,
    id: i64,
    patch: CamperPatch,
) -> CampResult<CamperSummaryView> {
    let mut tx = pool.begin().await?;
    let Some(row) = camper_repo::load_camper_by_id(&mut tx, id).await? else {
        return abort(tx, CampError::NotFound("Camper")).await;
    };

    // Patch failures all answer with the generic message.
    let row = match apply_patch(row, patch) {
        Ok(row) => row,
        Err(CampError::Validation(_)) => {
            return abort(tx, CampError::generic_validation()).await
        }
        Err(e) => return abort(tx, e).await,
    };

    camper_repo::update_camper(&mut tx, &row).await?;
    tx.commit().await?;

    info!(camper_id = id, "camper updated");
    Ok(row.into())
}

fn validate_new_camper(input: &NewCamperInput) -> CampResult<(String, i64)> {
    let name = validate_camper_name(input.name.as_deref())?;
    let age = validate_camper_age(input.age)?;
    Ok((name, age))
}

fn apply_patch(mut row: CamperRow, patch: CamperPatch) -> CampResult<CamperRow> {
    if let Some(name) = patch.name {
        row.name = validate_camper_name(name.as_deref())?;
    }
    if let Some(age) = patch.age {
        row.age = validate_camper_age(age)?;
    }
    Ok(row)
}

/// Deletes the camper and, in the same transaction, every signup referencing it.
pub async fn delete_camper(pool: &SqlitePool, id: i64) -> CampResult<()> {
    let mut tx = pool.begin().await?;
    if camper_repo::load_camper_by_id(&mut tx, id).await?.is_none() {
        return abort(tx, CampError::NotFound("Camper")).await;
    }

    let removed_signups = signup_repo::delete_signups_for_camper(&mut tx, id).await?;
    camper_repo::delete_camper(&mut tx, id).await?;
    tx.commit().await?;

    info!(camper_id = id, removed_signups, "camper deleted");
    Ok(())
}
