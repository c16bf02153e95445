//! Token error taxonomy

use thiserror::Error;

/// Errors produced by token makers
///
/// Verification only ever surfaces [`TokenError::Expired`] or
/// [`TokenError::Invalid`]. Neither carries detail about which part of the
/// token failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Secret shorter than the signed maker accepts
    #[error("invalid key size: must be at least {min} bytes, got {actual}")]
    KeyTooShort { min: usize, actual: usize },

    /// Secret not the exact length the cipher requires
    #[error("invalid key size: must be exactly {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Subject was empty at issuance
    #[error("token subject must not be empty")]
    EmptySubject,

    /// Duration was zero or not representable
    #[error("token duration must be positive and representable")]
    InvalidDuration,

    /// Signing or sealing failed
    #[error("failed to issue token: {0}")]
    Issue(String),

    /// Cryptographically valid token past its expiry
    #[error("token has expired")]
    Expired,

    /// Malformed, tampered, or issued under another algorithm
    #[error("token is invalid")]
    Invalid,
}

impl TokenError {
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// True for key material problems, which are fatal at startup
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::KeyTooShort { .. } | Self::InvalidKeyLength { .. })
    }
}
