/// Authentication middleware protecting routes
///
/// Extracts the bearer token from the Authorization header, consults the
/// revocation list, validates the JWT, and on success adds the authenticated
/// identity to request extensions.
use super::jwt::{validate_token, TokenError};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use thiserror::Error;

/// Authenticated identity derived per-request from a verified,
/// non-revoked token. Never persisted.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Verified subject of the presented token
    pub username: String,
    /// The raw token string, kept so logout can revoke exactly what
    /// was presented
    pub token: String,
}

/// Authentication middleware errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingAuthHeader,

    #[error("Invalid authorization format")]
    InvalidAuthHeader,

    #[error("Token has been invalidated")]
    TokenRevoked,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] TokenError),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // Every token failure collapses to the same wire message; which
        // sub-check failed stays internal.
        let message = match self {
            AuthError::MissingAuthHeader => "Missing authorization header",
            AuthError::InvalidAuthHeader => "Invalid authorization format",
            AuthError::TokenRevoked => "Token has been invalidated",
            AuthError::InvalidToken(_) => "Invalid token",
        };

        let body = serde_json::json!({
            "error": message,
            "status": StatusCode::UNAUTHORIZED.as_u16(),
        });

        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

/// Pull the bearer token out of the Authorization header
pub(crate) fn extract_bearer(headers: &axum::http::HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthHeader)
}

/// Authentication middleware requiring a valid, non-revoked bearer token
///
/// Order matters: the revocation check runs before signature validation.
/// A revoked token is still cryptographically valid until it expires, so
/// membership in the revocation list must be sufficient on its own to
/// reject the request.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer(request.headers())?.to_string();

    if state.revoked.is_revoked(&token) {
        tracing::debug!("rejected revoked token");
        return Err(AuthError::TokenRevoked);
    }

    let claims = validate_token(&state.config.auth, &token)?;

    request.extensions_mut().insert(AuthenticatedUser {
        username: claims.sub,
        token,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue};

    #[test]
    fn test_extract_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );

        assert_eq!(extract_bearer(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        let result = extract_bearer(&headers);
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[test]
    fn test_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );

        let result = extract_bearer(&headers);
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[test]
    fn test_all_auth_errors_are_401() {
        let errors = [
            AuthError::MissingAuthHeader,
            AuthError::InvalidAuthHeader,
            AuthError::TokenRevoked,
            AuthError::InvalidToken(TokenError::InvalidToken),
        ];

        for error in errors {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }
}
