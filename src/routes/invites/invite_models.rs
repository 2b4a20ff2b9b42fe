use serde::{Deserialize, Serialize};

use crate::models::invite::Invite;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInviteRequest {
    pub email: String,
    pub group_id: i32,
}

#[derive(Serialize)]
pub struct SendInviteResponse {
    pub invite: Invite,
}

#[derive(Deserialize)]
pub struct GetInviteQuery {
    #[serde(rename = "inviteId")]
    pub invite_id: String,
}

/// Only the fields the invite landing page needs; nothing sensitive.
#[derive(Serialize)]
pub struct GetInviteResponse {
    pub id: String,
    pub invited_email: String,
    pub accepted: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInviteRequest {
    pub invite_id: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Serialize)]
pub struct AcceptInviteResponse {
    pub ok: bool,
    #[serde(rename = "groupId", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
