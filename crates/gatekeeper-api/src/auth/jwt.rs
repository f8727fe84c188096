//! JWT token issuance and validation
//!
//! Implements stateless bearer tokens with HMAC-SHA256 signing. Tokens are
//! self-contained: the server never stores what it issued, only a revocation
//! list of tokens it has been told to forget (see `revocation`).

use gatekeeper_core::config::AuthConfig;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// JWT claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the authenticated username
    pub sub: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: u64,
    /// Expiration timestamp (Unix epoch)
    pub exp: u64,
}

/// Token issuance and validation errors
///
/// Callers outside the auth gate must not surface which variant occurred;
/// the wire response is a uniform "invalid token".
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to encode JWT: {0}")]
    EncodingError(jsonwebtoken::errors::Error),

    #[error("Invalid token format")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Unexpected signing algorithm")]
    InvalidAlgorithm,

    #[error("System time error: {0}")]
    SystemTimeError(#[from] std::time::SystemTimeError),
}

/// Issue a signed access token for `subject`
///
/// The embedded expiry is `now + token_ttl_secs`. Pure construction: no
/// shared state is touched.
pub fn issue_token(config: &AuthConfig, subject: &str) -> Result<String, TokenError> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

    let claims = Claims {
        sub: subject.to_string(),
        iat: now,
        exp: now + config.token_ttl_secs,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(TokenError::EncodingError)
}

/// Validate an access token and extract its claims
///
/// Only HS256 is accepted: a token claiming `none` or any other algorithm is
/// rejected even when otherwise well-formed, which closes the signature
/// downgrade/confusion hole. Expiry is checked with zero leeway, so the
/// expiry instant itself is the last moment the token validates.
pub fn validate_token(config: &AuthConfig, token: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::ExpiredToken,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => TokenError::InvalidAlgorithm,
        _ => TokenError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn test_config() -> AuthConfig {
        AuthConfig::default()
    }

    #[test]
    fn test_issue_and_validate_token() {
        let config = test_config();

        let token = issue_token(&config, "admin").expect("Failed to issue token");
        let claims = validate_token(&config, &token).expect("Failed to validate token");

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.exp, claims.iat + config.token_ttl_secs);
    }

    #[test]
    fn test_malformed_token() {
        let config = test_config();
        let result = validate_token(&config, "not.a.token");
        assert!(matches!(result, Err(TokenError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret() {
        let issuer = AuthConfig {
            jwt_secret: "secret-one".to_string(),
            ..Default::default()
        };
        let verifier = AuthConfig {
            jwt_secret: "secret-two".to_string(),
            ..Default::default()
        };

        let token = issue_token(&issuer, "admin").unwrap();
        let result = validate_token(&verifier, &token);

        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_expired_token() {
        let config = test_config();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Expired five seconds ago; leeway is zero so this must fail.
        let claims = Claims {
            sub: "admin".to_string(),
            iat: now - 3600,
            exp: now - 5,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let result = validate_token(&config, &token);
        assert!(matches!(result, Err(TokenError::ExpiredToken)));
    }

    #[test]
    fn test_token_valid_until_expiry() {
        let config = test_config();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Still a minute of life left.
        let claims = Claims {
            sub: "admin".to_string(),
            iat: now,
            exp: now + 60,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let claims = validate_token(&config, &token).expect("token should still be valid");
        assert_eq!(claims.sub, "admin");
    }

    #[test]
    fn test_unsigned_token_rejected() {
        let config = test_config();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Hand-built token claiming "alg": "none" with an empty signature.
        // Parses syntactically but must never authenticate.
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD
            .encode(format!(r#"{{"sub":"admin","iat":{},"exp":{}}}"#, now, now + 3600));
        let token = format!("{header}.{payload}.");

        let result = validate_token(&config, &token);
        assert!(result.is_err());
    }
}
