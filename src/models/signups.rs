#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct SignupRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

/// Signup joined with its activity, as listed under a camper.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CamperSignupRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity_name: Option<String>,
    pub activity_difficulty: Option<i64>,
}

/// Signup joined with its camper, as listed under an activity.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivitySignupRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper_name: String,
    pub camper_age: i64,
}
