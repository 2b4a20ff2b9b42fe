use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::expense::Expense;
use crate::models::group::Group;
use crate::models::saving::Saving;

#[derive(Deserialize)]
pub struct CreateGroupRequest {
    pub group_name: String,
    pub savings_goal: f64,
}

#[derive(Serialize)]
pub struct CreateGroupResponse {
    pub group: Group,
}

#[derive(Serialize, FromRow)]
pub struct GroupSummary {
    pub group_id: i32,
    pub group_name: String,
    pub savings_goal: f64,
    pub savings_curr: f64,
    pub role: String,
}

#[derive(Serialize)]
pub struct GroupListResponse {
    pub groups: Vec<GroupSummary>,
}

#[derive(Deserialize)]
pub struct GroupDetailQuery {
    #[serde(rename = "groupId")]
    pub group_id: i32,
}

#[derive(Serialize, FromRow)]
pub struct MemberEntry {
    pub user_id: i32,
    pub user_name: String,
    pub user_email: String,
    pub role: String,
}

#[derive(Serialize)]
pub struct GroupDetailResponse {
    pub group: Group,
    pub members: Vec<MemberEntry>,
    pub expenses: Vec<Expense>,
    pub savings: Vec<Saving>,
}

#[derive(Deserialize)]
pub struct RemoveMemberRequest {
    pub group_id: i32,
    pub user_id: i32,
}

#[derive(Serialize)]
pub struct RemoveMemberResponse {
    pub ok: bool,
}
