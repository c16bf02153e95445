//! Configuration models

pub mod logging;
pub mod token;

pub use logging::LoggingConfig;
pub use token::{MAX_ACCESS_TOKEN_DURATION, TokenConfig};
