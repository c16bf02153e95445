//! Helper functions for creating and classifying errors

use super::types::AuthError;
use crate::token::TokenError;

impl AuthError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn not_owner() -> Self {
        Self::NotOwner("account doesn't belong to the authenticated user".to_string())
    }

    /// True when a request should be answered with 401
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Token(e) => e.is_expired() || e.is_invalid(),
            Self::MissingCredential
            | Self::MalformedCredential
            | Self::UnsupportedScheme(_)
            | Self::NotOwner(_) => true,
            _ => false,
        }
    }

    /// Stable machine-readable code, distinct per rejection kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::Io(_) | Self::Yaml(_) => "CONFIG_ERROR",
            Self::Token(TokenError::Expired) => "TOKEN_EXPIRED",
            Self::Token(TokenError::Invalid) => "TOKEN_INVALID",
            Self::Token(e) if e.is_configuration() => "CONFIG_ERROR",
            Self::Token(_) => "TOKEN_ISSUE_ERROR",
            Self::MissingCredential => "MISSING_CREDENTIAL",
            Self::MalformedCredential => "MALFORMED_CREDENTIAL",
            Self::UnsupportedScheme(_) => "UNSUPPORTED_SCHEME",
            Self::NotOwner(_) => "NOT_OWNER",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
