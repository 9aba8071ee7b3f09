#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CamperRow {
    pub id: i64,
    pub name: String,
    pub age: i64,
}
