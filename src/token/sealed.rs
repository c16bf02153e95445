//! Sealed token maker (AES-256-GCM authenticated encryption)
//!
//! Token layout: `v1.local.` followed by base64url(nonce || ciphertext || tag).
//! The header is bound into the tag as associated data, so a token cannot be
//! replayed under a different header.

use super::error::TokenError;
use super::maker::TokenMaker;
use super::payload::Payload;
use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit, Payload as AeadPayload},
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use rand::RngCore;
use std::time::Duration;
use tracing::debug;

/// AES-256 key size in bytes
pub const SYMMETRIC_KEY_LEN: usize = 32;

/// Version and purpose prefix of every sealed token
pub const TOKEN_HEADER: &str = "v1.local.";

/// 96-bit nonce as recommended for GCM
const NONCE_LEN: usize = 12;

/// GCM authentication tag length
const TAG_LEN: usize = 16;

/// Maker for encrypted, tamper-evident tokens
#[derive(Clone)]
pub struct SealedMaker {
    cipher: Aes256Gcm,
}

impl std::fmt::Debug for SealedMaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealedMaker")
            .field("header", &TOKEN_HEADER)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl SealedMaker {
    /// Create a sealed maker from a key of exactly [`SYMMETRIC_KEY_LEN`] bytes
    pub fn new(symmetric_key: &str) -> Result<Self, TokenError> {
        let key = symmetric_key.as_bytes();
        if key.len() != SYMMETRIC_KEY_LEN {
            return Err(TokenError::InvalidKeyLength {
                expected: SYMMETRIC_KEY_LEN,
                actual: key.len(),
            });
        }

        let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| TokenError::InvalidKeyLength {
            expected: SYMMETRIC_KEY_LEN,
            actual: key.len(),
        })?;

        Ok(Self { cipher })
    }

    /// Strip the version header, rejecting tokens minted for anything else
    pub fn check_header<'a>(&self, token: &'a str) -> Result<&'a str, TokenError> {
        token.strip_prefix(TOKEN_HEADER).ok_or_else(|| {
            debug!("Rejected token without sealed header");
            TokenError::Invalid
        })
    }

    fn seal(&self, plaintext: &[u8]) -> Result<String, TokenError> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(
                nonce,
                AeadPayload {
                    msg: plaintext,
                    aad: TOKEN_HEADER.as_bytes(),
                },
            )
            .map_err(|e| TokenError::Issue(format!("encryption failed: {}", e)))?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&ciphertext);

        Ok(format!("{}{}", TOKEN_HEADER, URL_SAFE_NO_PAD.encode(&sealed)))
    }

    fn open(&self, body: &str) -> Result<Vec<u8>, TokenError> {
        let sealed = URL_SAFE_NO_PAD
            .decode(body)
            .map_err(|_| TokenError::Invalid)?;

        if sealed.len() < NONCE_LEN + TAG_LEN {
            return Err(TokenError::Invalid);
        }

        let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
        self.cipher
            .decrypt(
                Nonce::from_slice(nonce_bytes),
                AeadPayload {
                    msg: ciphertext,
                    aad: TOKEN_HEADER.as_bytes(),
                },
            )
            .map_err(|_| TokenError::Invalid)
    }
}

impl TokenMaker for SealedMaker {
    fn create_token(
        &self,
        subject: &str,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError> {
        let payload = Payload::new(subject, duration)?;

        let plaintext =
            serde_json::to_vec(&payload).map_err(|e| TokenError::Issue(e.to_string()))?;
        let token = self.seal(&plaintext)?;

        debug!("Created sealed token {} for subject: {}", payload.id(), subject);
        Ok((token, payload))
    }

    fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Payload, TokenError> {
        let body = self.check_header(token)?;
        let plaintext = self.open(body)?;

        let payload: Payload =
            serde_json::from_slice(&plaintext).map_err(|_| TokenError::Invalid)?;
        payload.check_claims()?;
        payload.check_expiry(now)?;

        debug!("Token verified for subject: {}", payload.subject());
        Ok(payload)
    }
}
