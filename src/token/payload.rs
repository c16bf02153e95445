//! Token payload (claims) and its validity window

use super::error::TokenError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Claims carried inside every token
///
/// Fields are private: a payload is fixed once built, and verification hands
/// back an owned copy decoded from the token bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Payload {
    /// Unique token identifier
    id: Uuid,
    /// Authenticated principal (username)
    subject: String,
    /// Issuance time
    issued_at: DateTime<Utc>,
    /// Expiry time, always after `issued_at`
    expires_at: DateTime<Utc>,
}

impl Payload {
    /// Build a payload for `subject` valid for `duration` from now
    pub fn new(subject: &str, duration: Duration) -> Result<Self, TokenError> {
        Self::new_at(subject, duration, Utc::now())
    }

    /// Build a payload issued at `now`
    pub fn new_at(
        subject: &str,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> Result<Self, TokenError> {
        if subject.is_empty() {
            return Err(TokenError::EmptySubject);
        }
        if duration.is_zero() {
            return Err(TokenError::InvalidDuration);
        }

        let lifetime =
            chrono::Duration::from_std(duration).map_err(|_| TokenError::InvalidDuration)?;
        let expires_at = now
            .checked_add_signed(lifetime)
            .ok_or(TokenError::InvalidDuration)?;

        Ok(Self {
            id: Uuid::new_v4(),
            subject: subject.to_string(),
            issued_at: now,
            expires_at,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Reject decoded claims that could never have been issued
    pub(crate) fn check_claims(&self) -> Result<(), TokenError> {
        if self.subject.is_empty() || self.expires_at <= self.issued_at {
            return Err(TokenError::Invalid);
        }
        Ok(())
    }

    /// Fail with [`TokenError::Expired`] once `now` is past the expiry
    pub fn check_expiry(&self, now: DateTime<Utc>) -> Result<(), TokenError> {
        if self.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        Ok(())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Time left before expiry, `None` once expired
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        (self.expires_at - now).to_std().ok()
    }
}
