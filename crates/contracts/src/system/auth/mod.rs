//! Session DTOs exchanged by the login form and `/api/system/auth`.

use serde::{Deserialize, Serialize};

use crate::system::access::AccessTier;
use crate::system::users::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Access token (24h) plus a refresh token (90 days)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

/// Body of both `refresh` and `logout`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// The signed-in user as the client sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: i32,
}

impl UserInfo {
    /// Full name when set, otherwise the login name
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }

    pub fn tier(&self) -> AccessTier {
        AccessTier::from_role(Some(self.role))
    }
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// JWT payload; `sub` is the user id, `exp`/`iat` are unix seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub username: String,
    pub role: i32,
    pub exp: usize,
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(full_name: Option<&str>, role: i32) -> UserInfo {
        UserInfo {
            id: "u-1".into(),
            username: "karim".into(),
            full_name: full_name.map(str::to_string),
            email: None,
            role,
        }
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(info(Some("کریم احمدی"), 0).display_name(), "کریم احمدی");
        assert_eq!(info(Some("  "), 0).display_name(), "karim");
        assert_eq!(info(None, 0).display_name(), "karim");
    }

    #[test]
    fn test_tier_follows_role() {
        assert_eq!(info(None, 1).tier(), AccessTier::Full);
        assert_eq!(info(None, 3).tier(), AccessTier::Restricted);
        assert_eq!(info(None, 2).tier(), AccessTier::SignOutOnly);
    }
}
