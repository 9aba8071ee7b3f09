use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub mod routes;

use routes::{activities, campers, signups};

/// Builds the application router over a ready pool (schema already ensured).
pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(routes::home_handler))
        .route(
            "/campers",
            get(campers::list_campers_handler).post(campers::create_camper_handler),
        )
        .route(
            "/campers/:id",
            get(campers::camper_detail_handler)
                .patch(campers::update_camper_handler)
                .delete(campers::delete_camper_handler),
        )
        .route(
            "/activities",
            get(activities::list_activities_handler).post(activities::create_activity_handler),
        )
        .route(
            "/activities/:id",
            get(activities::activity_detail_handler)
                .patch(activities::update_activity_handler)
                .delete(activities::delete_activity_handler),
        )
        .route(
            "/signups",
            get(signups::list_signups_handler).post(signups::create_signup_handler),
        )
        .route(
            "/signups/:id",
            get(signups::signup_detail_handler).delete(signups::delete_signup_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(pool)
}
