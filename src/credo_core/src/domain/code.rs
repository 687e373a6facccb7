use chrono::{DateTime, TimeDelta, Utc};
use rand::{Rng, distr::Alphanumeric};
use serde::{Deserialize, Serialize};

/// Lifetime of activation and reset codes.
pub const CODE_TTL_SECONDS: i64 = 60 * 60;

const CODE_LENGTH: usize = 32;

/// One-time verification code (activation or password reset).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Code {
    code: String,
    created_at: DateTime<Utc>,
}

impl Code {
    /// Fresh random code stamped with the current time.
    pub fn generate() -> Self {
        let code = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(CODE_LENGTH)
            .map(char::from)
            .collect::<String>();
        Self::new(code, Utc::now())
    }

    pub fn new(code: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            created_at,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.code == candidate
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at > TimeDelta::seconds(CODE_TTL_SECONDS)
    }
}
