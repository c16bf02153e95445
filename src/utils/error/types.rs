//! Error types for the token service

use crate::token::TokenError;
use thiserror::Error;

/// Result type alias for the token service
pub type Result<T> = std::result::Result<T, AuthError>;

/// Main error type for the token service
#[derive(Error, Debug)]
pub enum AuthError {
    /// Configuration errors, fatal at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token issuance or verification errors
    #[error(transparent)]
    Token(#[from] TokenError),

    /// No Authorization header on the request
    #[error("authorization header is not provided")]
    MissingCredential,

    /// Authorization header not of the form `<scheme> <token>`
    #[error("invalid authorization header format")]
    MalformedCredential,

    /// Authorization scheme other than bearer
    #[error("unsupported authorization type {0}")]
    UnsupportedScheme(String),

    /// Authenticated principal does not own the resource
    #[error("{0}")]
    NotOwner(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
