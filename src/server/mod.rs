//! HTTP-facing pieces of the token service
//!
//! The authorization gate, the per-request principal extractor and the shared
//! application state used by login and protected handlers.

pub mod extract;
pub mod middleware;
pub mod state;

pub use extract::AuthPayload;
pub use middleware::{AuthMiddleware, authorize, parse_authorization_header};
pub use state::{AccessTokenResponse, AppState};
