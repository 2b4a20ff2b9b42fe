use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's association with a group. A non-null `removed_at` marks a
/// soft-deleted membership; removed users cannot rejoin via old invites.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct GroupMember {
    pub group_id: i32,
    pub user_id: i32,
    pub role: String,
    pub removed_at: Option<DateTime<Utc>>,
}

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MEMBER: &str = "member";

impl GroupMember {
    pub fn is_active(&self) -> bool {
        self.removed_at.is_none()
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_and_role_flags() {
        let active_admin = GroupMember {
            group_id: 1,
            user_id: 2,
            role: ROLE_ADMIN.into(),
            removed_at: None,
        };
        assert!(active_admin.is_active());
        assert!(active_admin.is_admin());

        let removed_member = GroupMember {
            group_id: 1,
            user_id: 3,
            role: ROLE_MEMBER.into(),
            removed_at: Some(Utc::now()),
        };
        assert!(!removed_member.is_active());
        assert!(!removed_member.is_admin());
    }
}
