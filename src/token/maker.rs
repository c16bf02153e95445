//! Token maker capability and startup selection

use super::error::TokenError;
use super::jwt::JwtMaker;
use super::payload::Payload;
use super::sealed::SealedMaker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Issues and verifies session tokens under one cryptographic scheme
///
/// Implementations hold only their immutable key material, so a single
/// instance is shared across all requests without locking.
#[cfg_attr(test, mockall::automock)]
pub trait TokenMaker: Send + Sync {
    /// Issue a token for `subject` valid for `duration`
    fn create_token(&self, subject: &str, duration: Duration)
    -> Result<(String, Payload), TokenError>;

    /// Verify `token` as of `now`
    fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Payload, TokenError>;

    /// Verify `token` against the current wall clock
    fn verify_token(&self, token: &str) -> Result<Payload, TokenError> {
        self.verify_token_at(token, Utc::now())
    }
}

/// Which maker implementation the process runs with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MakerKind {
    /// HMAC-SHA256 signed JWT
    Jwt,
    /// AES-256-GCM sealed token
    #[default]
    Sealed,
}

impl MakerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jwt => "jwt",
            Self::Sealed => "sealed",
        }
    }
}

impl fmt::Display for MakerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MakerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jwt" => Ok(Self::Jwt),
            "sealed" => Ok(Self::Sealed),
            other => Err(format!("unknown token maker '{}', expected 'jwt' or 'sealed'", other)),
        }
    }
}

/// Construct the process-wide maker
pub fn build_maker(kind: MakerKind, secret: &str) -> Result<Arc<dyn TokenMaker>, TokenError> {
    let maker: Arc<dyn TokenMaker> = match kind {
        MakerKind::Jwt => Arc::new(JwtMaker::new(secret)?),
        MakerKind::Sealed => Arc::new(SealedMaker::new(secret)?),
    };
    Ok(maker)
}
