//! Signed token maker (HMAC-SHA256 JWT)

use super::error::TokenError;
use super::maker::TokenMaker;
use super::payload::Payload;
use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, decode_header, encode,
};
use std::time::Duration;
use tracing::debug;

/// Minimum secret length in bytes
pub const MIN_SECRET_KEY_LEN: usize = 32;

/// JWT maker for signed, self-contained tokens
#[derive(Clone)]
pub struct JwtMaker {
    /// Encoding key for signing tokens
    encoding_key: EncodingKey,
    /// Decoding key for verifying tokens
    decoding_key: DecodingKey,
    /// The only algorithm this maker signs with or accepts
    algorithm: Algorithm,
}

impl std::fmt::Debug for JwtMaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtMaker")
            .field("algorithm", &self.algorithm)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl JwtMaker {
    /// Create a new JWT maker from a secret of at least [`MIN_SECRET_KEY_LEN`] bytes
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        let secret = secret.as_bytes();
        if secret.len() < MIN_SECRET_KEY_LEN {
            return Err(TokenError::KeyTooShort {
                min: MIN_SECRET_KEY_LEN,
                actual: secret.len(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Reject any token whose header declares an algorithm other than ours.
    ///
    /// Runs before the signature is looked at.
    pub fn check_algorithm(&self, header: &Header) -> Result<(), TokenError> {
        if header.alg != self.algorithm {
            debug!("Rejected token declaring algorithm {:?}", header.alg);
            return Err(TokenError::Invalid);
        }
        Ok(())
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked against the caller's clock after decoding
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        validation
    }
}

impl TokenMaker for JwtMaker {
    fn create_token(
        &self,
        subject: &str,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError> {
        let payload = Payload::new(subject, duration)?;

        let header = Header::new(self.algorithm);
        let token = encode(&header, &payload, &self.encoding_key)
            .map_err(|e| TokenError::Issue(e.to_string()))?;

        debug!("Created signed token {} for subject: {}", payload.id(), subject);
        Ok((token, payload))
    }

    fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Payload, TokenError> {
        let header = decode_header(token).map_err(|_| TokenError::Invalid)?;
        self.check_algorithm(&header)?;

        let token_data = decode::<Payload>(token, &self.decoding_key, &self.validation())
            .map_err(|e| {
                debug!("JWT verification failed: {:?}", e.kind());
                TokenError::Invalid
            })?;

        let payload = token_data.claims;
        payload.check_claims()?;
        payload.check_expiry(now)?;

        debug!("Token verified for subject: {}", payload.subject());
        Ok(payload)
    }
}
