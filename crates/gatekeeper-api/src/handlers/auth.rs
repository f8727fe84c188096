//! Session handlers: login, logout, verify
//!
//! Thin consumers of the credential store, token codec, and revocation list.
//! Logout and verify sit behind the auth gate; presenting an already-invalid
//! token to either is a 401 before the handler runs.

use crate::auth::{issue_token, AuthenticatedUser};
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response with the issued token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}

/// Logout response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

/// Verify response echoing the authenticated identity
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyResponse {
    pub authenticated: bool,
    pub username: String,
    pub message: String,
}

/// Login with username and password
///
/// On a credential match, issues a signed access token. The failure response
/// is uniform: it never reveals whether the username exists.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ApiError),
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !state.credentials.verify(&request.username, &request.password) {
        tracing::debug!("failed login attempt");
        return Err(AppError::InvalidCredentials);
    }

    let token = issue_token(&state.config.auth, &request.username)
        .map_err(|e| AppError::Internal(format!("Failed to create token: {e}")))?;

    tracing::info!(username = %request.username, "login successful");

    Ok(Json(LoginResponse {
        token,
        message: "Login successful".to_string(),
    }))
}

/// Logout the current session
///
/// Revokes exactly the token that was presented. The token stays
/// cryptographically valid until expiry, but the auth gate will reject it
/// from now on.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logout successful", body = LogoutResponse),
        (status = 401, description = "Missing, invalid, or already-revoked token"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> impl IntoResponse {
    state.revoked.revoke(&user.token);

    tracing::info!(username = %user.username, "session revoked");

    Json(LogoutResponse {
        message: "Logout successful".to_string(),
    })
}

/// Verify the presented token
///
/// Purely informational: echoes the identity the auth gate already verified.
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    tag = "auth",
    responses(
        (status = 200, description = "Token is valid", body = VerifyResponse),
        (status = 401, description = "Missing, invalid, or revoked token"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn verify_handler(Extension(user): Extension<AuthenticatedUser>) -> impl IntoResponse {
    Json(VerifyResponse {
        authenticated: true,
        username: user.username,
        message: "Token is valid".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_serialization() {
        let response = LoginResponse {
            token: "abc.def.ghi".to_string(),
            message: "Login successful".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("abc.def.ghi"));
        assert!(json.contains("Login successful"));
    }

    #[test]
    fn test_verify_response_serialization() {
        let response = VerifyResponse {
            authenticated: true,
            username: "admin".to_string(),
            message: "Token is valid".to_string(),
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
        assert_eq!(json["authenticated"], true);
        assert_eq!(json["username"], "admin");
    }
}
