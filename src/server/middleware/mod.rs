//! HTTP middleware implementations

mod auth;
mod helpers;


pub use auth::{AuthMiddleware, AuthMiddlewareService};
pub use helpers::{AUTHORIZATION_SCHEME, authorize, parse_authorization_header};
