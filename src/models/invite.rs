use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Invite {
    pub invite_id: String,
    pub invited_email: String,
    pub group_id: i32,
    pub inviter_id: i32,
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
}
