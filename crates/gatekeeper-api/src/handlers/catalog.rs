//! Demo catalog handlers
//!
//! Public, read-only listings backed by canned data in `gatekeeper-core`.

use axum::{response::IntoResponse, Json};
use gatekeeper_core::models::{demo_products, demo_users};

/// List demo users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "catalog",
    responses(
        (status = 200, description = "Demo user listing")
    )
)]
pub async fn list_users() -> impl IntoResponse {
    Json(demo_users())
}

/// List demo products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "catalog",
    responses(
        (status = 200, description = "Demo product listing")
    )
)]
pub async fn list_products() -> impl IntoResponse {
    Json(demo_products())
}
