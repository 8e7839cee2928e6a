//! Access-token claim extraction.
//!
//! The backend issues self-contained tokens whose payload carries the user
//! id. The client holds no signing key, so the payload is read with
//! signature validation disabled; an undecodable token means "unusable
//! token", nothing more. This is a convenience lookup, not a security
//! check.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
#[error("access token is not decodable: {0}")]
pub struct TokenError(#[from] jsonwebtoken::errors::Error);

/// Claims the client actually reads. Unknown claims are ignored.
#[derive(Debug, Deserialize)]
struct AccessClaims {
    id: String,
}

/// Extract the `id` claim from an access token without verifying it.
///
/// # Errors
///
/// Returns a [`TokenError`] for any malformed token: wrong segment count,
/// bad base64, bad JSON, or a missing `id` claim. Expired tokens still
/// decode; expiry is the server's call.
pub fn decode_user_id(token: &str) -> Result<String, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<AccessClaims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims.id)
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
