//! Session token handling
//!
//! This module provides stateless token issuance and verification. Two
//! interchangeable makers exist: [`JwtMaker`] (HMAC-signed JWT) and
//! [`SealedMaker`] (AES-256-GCM sealed). One is picked at startup through
//! [`build_maker`] and shared behind `Arc<dyn TokenMaker>`.

mod error;
mod jwt;
mod maker;
mod payload;
mod sealed;


pub use error::TokenError;
pub use jwt::{JwtMaker, MIN_SECRET_KEY_LEN};
pub use maker::{MakerKind, TokenMaker, build_maker};
pub use payload::Payload;
pub use sealed::{SYMMETRIC_KEY_LEN, SealedMaker, TOKEN_HEADER};

#[cfg(test)]
pub use maker::MockTokenMaker;
