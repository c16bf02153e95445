//! Configuration validation

use super::models::*;
use crate::token::{MIN_SECRET_KEY_LEN, MakerKind, SYMMETRIC_KEY_LEN};
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for TokenConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating token configuration");

        if self.symmetric_key.is_empty() {
            return Err("Token symmetric key cannot be empty".to_string());
        }

        let key_len = self.symmetric_key.len();
        match self.maker {
            MakerKind::Jwt if key_len < MIN_SECRET_KEY_LEN => {
                return Err(format!(
                    "Token symmetric key must be at least {} bytes for the jwt maker, got {}",
                    MIN_SECRET_KEY_LEN, key_len
                ));
            }
            MakerKind::Sealed if key_len != SYMMETRIC_KEY_LEN => {
                return Err(format!(
                    "Token symmetric key must be exactly {} bytes for the sealed maker, got {}",
                    SYMMETRIC_KEY_LEN, key_len
                ));
            }
            _ => {}
        }

        if self.access_token_duration == 0 {
            return Err("Access token duration must be greater than 0".to_string());
        }
        if self.access_token_duration > MAX_ACCESS_TOKEN_DURATION {
            return Err(format!(
                "Access token duration must be at most {} seconds, got {}",
                MAX_ACCESS_TOKEN_DURATION, self.access_token_duration
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

        if !LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            return Err(format!("Unknown log level '{}'", self.level));
        }

        Ok(())
    }
}
