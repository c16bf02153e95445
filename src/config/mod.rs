//! Configuration management for the token service
//!
//! This module handles loading and validation of the service configuration.
//! The symmetric key is loaded once and never reloaded while running.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::token::MakerKind;
use crate::utils::error::{AuthError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Token maker configuration
    pub token: TokenConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn new(token: TokenConfig) -> Self {
        Self {
            token,
            logging: LoggingConfig::default(),
        }
    }

    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        let config: Self = serde_yaml::from_str(&content)?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables, reading `.env` if present
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment file {:?}", path);
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let symmetric_key = lookup("TOKEN_SYMMETRIC_KEY")
            .ok_or_else(|| AuthError::config("TOKEN_SYMMETRIC_KEY is not set"))?;

        let maker = match lookup("TOKEN_MAKER") {
            Some(value) => value.parse::<MakerKind>().map_err(AuthError::Config)?,
            None => MakerKind::default(),
        };

        let mut token = TokenConfig::new(maker, symmetric_key);
        if let Some(duration) = lookup("ACCESS_TOKEN_DURATION") {
            token.access_token_duration = duration
                .trim()
                .parse()
                .map_err(|e| AuthError::config(format!("Invalid access token duration: {}", e)))?;
        }

        let mut logging = LoggingConfig::default();
        if let Some(level) = lookup("LOG_LEVEL") {
            logging.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            logging.json = format.eq_ignore_ascii_case("json");
        }

        let config = Self { token, logging };
        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.token
            .validate()
            .map_err(|e| AuthError::config(format!("Token config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| AuthError::config(format!("Logging config error: {}", e)))?;

        models::token::warn_long_lived_tokens(&self.token);

        debug!("Configuration validation completed");
        Ok(())
    }
}
