use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::error::CampResult;
use crate::services::activity_service::{
    self, ActivityDetailView, ActivityPatch, ActivitySummaryView, NewActivityInput,
};
use crate::web::routes::json_body;

pub async fn list_activities_handler(
    State(pool): State<SqlitePool>,
) -> CampResult<Json<Vec<ActivitySummaryView>>> {
    activity_service::list_activities(&pool).await.map(Json)
}

pub async fn activity_detail_handler(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> CampResult<Json<ActivityDetailView>> {
    activity_service::load_activity_detail(&pool, id).await.map(Json)
}

pub async fn create_activity_handler(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewActivityInput>, JsonRejection>,
) -> CampResult<(StatusCode, Json<ActivitySummaryView>)> {
    let input = json_body(payload)?;
    let activity = activity_service::create_activity(&pool, input).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

pub async fn update_activity_handler(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
    payload: Result<Json<ActivityPatch>, JsonRejection>,
) -> CampResult<(StatusCode, Json<ActivitySummaryView>)> {
    let patch = json_body(payload)?;
    let activity = activity_service::update_activity(&pool, id, patch).await?;
    Ok((StatusCode::ACCEPTED, Json(activity)))
}

pub async fn delete_activity_handler(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> CampResult<StatusCode> {
    activity_service::delete_activity(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
