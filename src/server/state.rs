//! Application state shared across HTTP handlers

use super::middleware::AuthMiddleware;
use crate::config::{Config, Validate};
use crate::token::{Payload, TokenMaker, build_maker};
use crate::utils::error::{AuthError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Shared state, built once at startup
///
/// The token maker is selected here from configuration and then used only
/// through the [`TokenMaker`] trait.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Process-wide token maker
    pub token_maker: Arc<dyn TokenMaker>,
}

/// Body returned to a client after a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// Opaque bearer credential
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Expiry of the access token
    pub expires_at: DateTime<Utc>,
    /// Principal the token was issued to
    pub subject: String,
}

impl AppState {
    /// Build the state; a bad key here is fatal to startup
    pub fn new(config: Config) -> Result<Self> {
        config.token.validate().map_err(AuthError::Config)?;

        let token_maker = build_maker(config.token.maker, &config.token.symmetric_key)
            .map_err(|e| AuthError::Config(format!("cannot create token maker: {}", e)))?;

        info!("Using {} token maker", config.token.maker);
        Ok(Self::with_maker(config, token_maker))
    }

    /// Build the state around an existing maker
    pub fn with_maker(config: Config, token_maker: Arc<dyn TokenMaker>) -> Self {
        Self {
            config: Arc::new(config),
            token_maker,
        }
    }

    /// Gate for routes that require an authenticated principal
    pub fn auth_middleware(&self) -> AuthMiddleware {
        AuthMiddleware::new(self.token_maker.clone())
    }

    /// Issue an access token after the caller has checked the password
    pub fn issue_access_token(&self, subject: &str) -> Result<AccessTokenResponse> {
        let (access_token, payload) = self
            .token_maker
            .create_token(subject, self.config.token.access_token_ttl())?;

        debug!("Issued access token {} for subject: {}", payload.id(), subject);
        Ok(AccessTokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_at: payload.expires_at(),
            subject: payload.subject().to_string(),
        })
    }

    /// Verify an access token against the current clock
    pub fn verify_access_token(&self, token: &str) -> Result<Payload> {
        Ok(self.token_maker.verify_token(token)?)
    }
}
