use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::error::CampResult;
use crate::services::camper_service::{
    self, CamperDetailView, CamperPatch, CamperSummaryView, NewCamperInput,
};
use crate::web::routes::json_body;

pub async fn list_campers_handler(
    State(pool): State<SqlitePool>,
) -> CampResult<Json<Vec<CamperSummaryView>>> {
    camper_service::list_campers(&pool).await.map(Json)
}

pub async fn camper_detail_handler(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> CampResult<Json<CamperDetailView>> {
    camper_service::load_camper_detail(&pool, id).await.map(Json)
}

pub async fn create_camper_handler(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewCamperInput>, JsonRejection>,
) -> CampResult<(StatusCode, Json<CamperSummaryView>)> {
    let input = json_body(payload)?;
    let camper = camper_service::create_camper(&pool, input).await?;
    Ok((StatusCode::CREATED, Json(camper)))
}

/// Responds 202 Accepted on success.
pub async fn update_camper_handler(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
    payload: Result<Json<CamperPatch>, JsonRejection>,
) -> CampResult<(StatusCode, Json<CamperSummaryView>)> {
    let patch = json_body(payload)?;
    let camper = camper_service::update_camper(&pool, id, patch).await?;
    Ok((StatusCode::ACCEPTED, Json(camper)))
}

pub async fn delete_camper_handler(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> CampResult<StatusCode> {
    camper_service::delete_camper(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
