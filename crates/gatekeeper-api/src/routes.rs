//! API route definitions

use crate::auth::middleware::auth_middleware;
use crate::handlers::{auth, catalog, files};
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create the `/api` routes
pub fn api_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/users", get(catalog::list_users))
        .route("/products", get(catalog::list_products))
        .route("/auth/login", post(auth::login_handler));

    // Protected routes (authentication required)
    let protected_routes = Router::new()
        .route("/auth/logout", post(auth::logout_handler))
        .route("/auth/verify", get(auth::verify_handler))
        .route("/files/upload", post(files::upload_handler))
        .route("/files/download/:filename", get(files::download_handler))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}
