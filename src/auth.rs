use actix_web::HttpRequest;
use sqlx::MySqlPool;

use crate::models::group_member::GroupMember;

/// The user resolved from a valid, unexpired session token.
#[derive(Debug, sqlx::FromRow)]
pub struct SessionUser {
    pub user_id: i32,
    pub user_name: String,
    pub user_email: String,
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    let header = req.headers().get("Authorization")?.to_str().ok()?;
    parse_bearer(header)
}

pub fn parse_bearer(header: &str) -> Option<String> {
    let rest = header.strip_prefix("Bearer ")?.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

/// Resolve a bearer token against the Sessions_ table. Returns `None` for an
/// unknown or expired session.
pub async fn resolve_token(
    pool: &MySqlPool,
    token: &str,
) -> Result<Option<SessionUser>, sqlx::Error> {
    sqlx::query_as::<_, SessionUser>(
        "SELECT u.user_id, u.user_name, u.user_email
         FROM Sessions_ s
         JOIN Users_ u ON s.user_id = u.user_id
         WHERE s.session_id = ? AND s.expires_at > NOW()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

/// Look up the caller's membership row for a group, soft-deleted rows
/// included. Callers decide what a removed row means for them.
pub async fn membership(
    pool: &MySqlPool,
    group_id: i32,
    user_id: i32,
) -> Result<Option<GroupMember>, sqlx::Error> {
    sqlx::query_as::<_, GroupMember>(
        "SELECT group_id, user_id, role, removed_at
         FROM GroupMembers_
         WHERE group_id = ? AND user_id = ?",
    )
    .bind(group_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Active (not soft-deleted) membership only.
pub async fn active_membership(
    pool: &MySqlPool,
    group_id: i32,
    user_id: i32,
) -> Result<Option<GroupMember>, sqlx::Error> {
    sqlx::query_as::<_, GroupMember>(
        "SELECT group_id, user_id, role, removed_at
         FROM GroupMembers_
         WHERE group_id = ? AND user_id = ? AND removed_at IS NULL",
    )
    .bind(group_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_bearer_header() {
        assert_eq!(
            parse_bearer("Bearer abc-123").as_deref(),
            Some("abc-123")
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_bearer("Bearer   tok  ").as_deref(), Some("tok"));
    }

    #[test]
    fn rejects_missing_prefix() {
        assert_eq!(parse_bearer("Basic abc"), None);
        assert_eq!(parse_bearer("abc-123"), None);
    }

    #[test]
    fn rejects_empty_token() {
        assert_eq!(parse_bearer("Bearer "), None);
        assert_eq!(parse_bearer("Bearer    "), None);
    }

    #[test]
    fn prefix_is_case_sensitive() {
        assert_eq!(parse_bearer("bearer abc"), None);
    }
}
