//! Error handling for the token service
//!
//! This module defines the crate-level error type and its HTTP mapping.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{AuthError, Result};
