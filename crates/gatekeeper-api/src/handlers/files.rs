//! File upload and download handlers
//!
//! Both endpoints sit behind the auth gate. Stored names are derived from
//! the uploading user, the upload time, and a content hash, so nothing the
//! client sends is trusted as a path. Downloads reject anything that could
//! escape the upload directory.

use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use utoipa::ToSchema;

/// Upload response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub filename: String,
    pub size: u64,
    pub message: String,
}

/// Upload a file (multipart field `file`)
///
/// The stored name is `{username}_{timestamp}_{content-hash}{ext}`; the
/// extension is the only part taken from the client-supplied filename.
#[utoipa::path(
    post,
    path = "/api/files/upload",
    tag = "files",
    responses(
        (status = 201, description = "File uploaded", body = UploadResponse),
        (status = 400, description = "Missing file field or body too large", body = crate::error::ApiError),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("File too large or invalid form".to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|_| AppError::BadRequest("File too large or invalid form".to_string()))?;

        let filename = stored_filename(&user.username, &original_name, &data);
        let path = state.config.upload.dir.join(&filename);

        tokio::fs::write(&path, &data).await?;

        tracing::info!(
            username = %user.username,
            filename = %filename,
            size = data.len(),
            "file uploaded"
        );

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                filename,
                size: data.len() as u64,
                message: "File uploaded successfully".to_string(),
            }),
        ));
    }

    Err(AppError::BadRequest(
        "Failed to get file from request".to_string(),
    ))
}

/// Download a previously uploaded file
#[utoipa::path(
    get,
    path = "/api/files/download/{filename}",
    tag = "files",
    params(
        ("filename" = String, Path, description = "Stored filename")
    ),
    responses(
        (status = 200, description = "File contents"),
        (status = 400, description = "Invalid filename", body = crate::error::ApiError),
        (status = 404, description = "File not found", body = crate::error::ApiError),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn download_handler(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !is_safe_filename(&filename) {
        return Err(AppError::BadRequest("Invalid filename".to_string()));
    }

    let path = state.config.upload.dir.join(&filename);

    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound("File".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "application/octet-stream".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        data,
    ))
}

/// Build the stored name: `{username}_{UTC timestamp}_{sha256 prefix}{ext}`
fn stored_filename(username: &str, original_name: &str, data: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(data));
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");

    let ext = std::path::Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    format!("{username}_{timestamp}_{}{ext}", &digest[..16])
}

/// Reject empty names and anything that could traverse out of the
/// upload directory
fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains("..")
        && !filename.contains('/')
        && !filename.contains('\\')
}
