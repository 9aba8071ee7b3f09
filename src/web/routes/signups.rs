use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::error::CampResult;
use crate::services::signup_service::{
    self, NewSignupInput, SignupDetailView, SignupSummaryView,
};
use crate::web::routes::json_body;

pub async fn list_signups_handler(
    State(pool): State<SqlitePool>,
) -> CampResult<Json<Vec<SignupSummaryView>>> {
    signup_service::list_signups(&pool).await.map(Json)
}

pub async fn signup_detail_handler(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> CampResult<Json<SignupDetailView>> {
    signup_service::load_signup_detail(&pool, id).await.map(Json)
}

pub async fn create_signup_handler(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewSignupInput>, JsonRejection>,
) -> CampResult<(StatusCode, Json<SignupDetailView>)> {
    let input = json_body(payload)?;
    let signup = signup_service::create_signup(&pool, input).await?;
    Ok((StatusCode::CREATED, Json(signup)))
}

pub async fn delete_signup_handler(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> CampResult<StatusCode> {
    signup_service::delete_signup(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
