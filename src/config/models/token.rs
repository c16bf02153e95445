//! Token configuration

use crate::token::MakerKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Token maker configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Maker implementation, chosen once at startup
    #[serde(default)]
    pub maker: MakerKind,
    /// Symmetric secret shared by issuance and verification
    pub symmetric_key: String,
    /// Access token lifetime in seconds
    #[serde(default = "default_access_token_duration")]
    pub access_token_duration: u64,
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("maker", &self.maker)
            .field("symmetric_key", &"[REDACTED]")
            .field("access_token_duration", &self.access_token_duration)
            .finish()
    }
}

impl TokenConfig {
    pub fn new(maker: MakerKind, symmetric_key: impl Into<String>) -> Self {
        Self {
            maker,
            symmetric_key: symmetric_key.into(),
            access_token_duration: default_access_token_duration(),
        }
    }

    /// Access token lifetime
    pub fn access_token_ttl(&self) -> Duration {
        Duration::from_secs(self.access_token_duration)
    }
}

pub(crate) fn default_access_token_duration() -> u64 {
    15 * 60
}

/// Longest accepted access token lifetime in seconds (ten years)
pub const MAX_ACCESS_TOKEN_DURATION: u64 = 10 * 365 * 86400;

/// Warn about lifetimes that are valid but risky for stateless tokens
pub fn warn_long_lived_tokens(config: &TokenConfig) {
    if config.access_token_duration > 86400 {
        warn!(
            "Access tokens live for {} seconds. Tokens cannot be revoked, consider a lifetime under 24 hours.",
            config.access_token_duration
        );
    }
}
