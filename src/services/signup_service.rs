use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::database::{activity_repo, camper_repo, signup_repo};
use crate::error::{CampError, CampResult};
use crate::models::validation::validate_signup_time;
use crate::models::{ActivityRow, CamperRow, SignupRow};
use crate::services::abort;
use crate::services::activity_service::ActivitySummaryView;
use crate::services::camper_service::CamperSummaryView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupSummaryView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

impl From<SignupRow> for SignupSummaryView {
    fn from(row: SignupRow) -> Self {
        Self {
            id: row.id,
            time: row.time,
            camper_id: row.camper_id,
            activity_id: row.activity_id,
        }
    }
}

/// Signup with both parents; the parents are rendered without their signups.
#[derive(Debug, Clone, Serialize)]
pub struct SignupDetailView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper: CamperSummaryView,
    pub activity: ActivitySummaryView,
}

impl SignupDetailView {
    fn build(signup: SignupRow, camper: CamperRow, activity: ActivityRow) -> Self {
        Self {
            id: signup.id,
            time: signup.time,
            camper_id: signup.camper_id,
            activity_id: signup.activity_id,
            camper: camper.into(),
            activity: activity.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NewSignupInput {
    pub time: Option<i64>,
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
}

pub async fn list_signups(pool: &SqlitePool) -> CampResult<Vec<SignupSummaryView>> {
    let mut conn = pool.acquire().await?;
    let rows = signup_repo::list_signups(&mut conn).await?;
    Ok(rows.into_iter().map(SignupSummaryView::from).collect())
}

pub async fn load_signup_detail(pool: &SqlitePool, id: i64) -> CampResult<SignupDetailView> {
    let mut conn = pool.acquire().await?;
    let Some(signup) = signup_repo::load_signup_by_id(&mut conn, id).await? else {
        return Err(CampError::NotFound("Signup"));
    };
    let camper = camper_repo::load_camper_by_id(&mut conn, signup.camper_id).await?;
    let activity = activity_repo::load_activity_by_id(&mut conn, signup.activity_id).await?;
    match (camper, activity) {
        (Some(camper), Some(activity)) => Ok(SignupDetailView::build(signup, camper, activity)),
        // Only reachable if foreign keys were bypassed.
        _ => Err(CampError::NotFound("Signup")),
    }
}

/// Both parents must exist and `time` must be a valid hour; otherwise no row
/// is written.
pub async fn create_signup(pool: &SqlitePool, input: NewSignupInput) -> CampResult<SignupDetailView> {
    let mut tx = pool.begin().await?;

    let camper = match input.camper_id {
        Some(id) => camper_repo::load_camper_by_id(&mut tx, id).await?,
        None => None,
    };
    let activity = match input.activity_id {
        Some(id) => activity_repo::load_activity_by_id(&mut tx, id).await?,
        None => None,
    };
    let (Some(camper), Some(activity)) = (camper, activity) else {
        warn!(
            camper_id = ?input.camper_id,
            activity_id = ?input.activity_id,
            "signup references a missing camper or activity"
        );
        return abort(tx, CampError::generic_validation()).await;
    };

    let time = match validate_signup_time(input.time) {
        Ok(time) => time,
        Err(e) => return abort(tx, e).await,
    };

    let new_signup = signup_repo::NewSignup {
        time,
        camper_id: camper.id,
        activity_id: activity.id,
    };
    let id = signup_repo::insert_signup(&mut tx, new_signup).await?;
    tx.commit().await?;

    info!(signup_id = id, camper_id = camper.id, activity_id = activity.id, "signup created");
    let signup = SignupRow {
        id,
        time,
        camper_id: camper.id,
        activity_id: activity.id,
    };
    Ok(SignupDetailView::build(signup, camper, activity))
}

pub async fn delete_signup(pool: &SqlitePool, id: i64) -> CampResult<()> {
    let mut tx = pool.begin().await?;
    if signup_repo::delete_signup(&mut tx, id).await? == 0 {
        return abort(tx, CampError::NotFound("Signup")).await;
    }
    tx.commit().await?;

    info!(signup_id = id, "signup deleted");
    Ok(())
}
