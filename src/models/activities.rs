#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ActivityRow {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}
