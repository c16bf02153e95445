//! # bank-token
//!
//! Stateless, self-verifying session tokens for the bank API.
//!
//! A login handler calls [`TokenMaker::create_token`] once the password has
//! been checked; every protected route sits behind [`AuthMiddleware`], which
//! calls [`TokenMaker::verify_token`] and exposes the authenticated subject
//! to handlers through the [`AuthPayload`] extractor.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bank_token::{Config, TokenConfig, MakerKind, AppState};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new(TokenConfig::new(
//!         MakerKind::Sealed,
//!         "0123456789abcdefghijklmnopqrstuv",
//!     ));
//!     let state = AppState::new(config)?;
//!
//!     let login = state.issue_access_token("alice")?;
//!     let payload = state.verify_access_token(&login.access_token)?;
//!     assert_eq!(payload.subject(), "alice");
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod server;
pub mod token;
pub mod utils;

pub use config::{Config, LoggingConfig, TokenConfig};
pub use server::{AccessTokenResponse, AppState, AuthMiddleware, AuthPayload};
pub use token::{JwtMaker, MakerKind, Payload, SealedMaker, TokenError, TokenMaker, build_maker};
pub use utils::error::{AuthError, Result};
