use serde::{Deserialize, Serialize};

use super::{role::Role, user::User, user_id::UserId};

/// Payload carried by both access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub uid: UserId,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

impl From<&User> for TokenClaims {
    fn from(user: &User) -> Self {
        Self {
            uid: user.uid().clone(),
            email: user.email().as_str().to_owned(),
            role: user.role(),
            is_active: user.is_active(),
        }
    }
}

/// Access token plus the refresh token that can mint the next pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub token: String,
    pub refresh_token: String,
}

/// Which half of a pair a token is. Access tokens authenticate requests;
/// refresh tokens only mint the next pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Result of a successful verification. Transport-only claims are kept apart
/// from the payload so that re-signing never carries them over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub claims: TokenClaims,
    pub kind: TokenKind,
    pub issued_at: i64,
    pub expires_at: i64,
}
