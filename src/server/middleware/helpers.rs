//! Helper functions for the authorization gate

use crate::token::{Payload, TokenMaker};
use crate::utils::error::AuthError;
use actix_web::http::header::{AUTHORIZATION, HeaderMap};

/// The single accepted authorization scheme, compared case-insensitively
pub const AUTHORIZATION_SCHEME: &str = "bearer";

/// Extract the bearer token from the Authorization header
pub fn parse_authorization_header(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?
        .to_str()
        .map_err(|_| AuthError::MalformedCredential)?;

    if value.is_empty() {
        return Err(AuthError::MissingCredential);
    }

    let mut fields = value.split_whitespace();
    let (Some(scheme), Some(token), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(AuthError::MalformedCredential);
    };

    if !scheme.eq_ignore_ascii_case(AUTHORIZATION_SCHEME) {
        return Err(AuthError::UnsupportedScheme(scheme.to_ascii_lowercase()));
    }

    Ok(token)
}

/// Run the full gate: header checks first, token verification only if they pass
pub fn authorize(headers: &HeaderMap, maker: &dyn TokenMaker) -> Result<Payload, AuthError> {
    let token = parse_authorization_header(headers)?;
    Ok(maker.verify_token(token)?)
}
