// src/models/mod.rs

pub mod expense;
pub mod group;
pub mod group_member;
pub mod invite;
pub mod saving;
pub mod session;
pub mod user;

use serde::Serialize;

/// Error body shared by every endpoint: `{ "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: &str) -> Self {
        ErrorResponse {
            error: msg.to_string(),
        }
    }
}
