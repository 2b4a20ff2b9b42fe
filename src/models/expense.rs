use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub expense_id: i32,
    pub group_id: i32,
    pub user_id: i32,
    pub amount: f64,
    pub title: Option<String>,
    pub note: String,
    pub created_at: DateTime<Utc>,
}
