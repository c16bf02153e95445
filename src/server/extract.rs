//! Per-request access to the authenticated principal

use crate::token::Payload;
use crate::utils::error::AuthError;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev};
use futures::future::{Ready, ready};

/// Verified token payload attached by [`AuthMiddleware`](super::AuthMiddleware)
///
/// This is the only trusted source of the caller's identity inside handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPayload(Payload);

impl AuthPayload {
    pub fn new(payload: Payload) -> Self {
        Self(payload)
    }

    pub fn payload(&self) -> &Payload {
        &self.0
    }

    pub fn subject(&self) -> &str {
        self.0.subject()
    }

    pub fn into_inner(self) -> Payload {
        self.0
    }

    /// Fail unless the authenticated subject is `owner`
    pub fn ensure_owner(&self, owner: &str) -> Result<(), AuthError> {
        if self.subject() != owner {
            return Err(AuthError::not_owner());
        }
        Ok(())
    }
}

impl FromRequest for AuthPayload {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthPayload>()
                .cloned()
                .ok_or_else(|| AuthError::internal("Missing authorization payload")),
        )
    }
}
