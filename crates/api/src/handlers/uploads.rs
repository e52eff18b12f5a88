//! Handlers for the `/upload` proxy endpoints.
//!
//! Incoming multipart bodies are spooled to a temp file under the
//! configured upload dir, forwarded to the third-party host, and the temp
//! file is removed on both success and failure paths.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response payload for both upload endpoints.
#[derive(Debug, Serialize)]
pub struct UploadResult {
    pub url: String,
}

/// A multipart file field pulled out of the request body.
struct UploadedFile {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// POST /api/upload/image
///
/// Forward a single `image` file to the image host and return its public URL.
pub async fn upload_image(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<UploadResult>> {
    let file = read_file_field(multipart, "image").await?;
    let tmp_path = spool(&state.config.upload.tmp_dir, &file).await?;

    let result = forward_image(&state, &tmp_path, &file).await;

    cleanup(&tmp_path).await;

    let url = result?;
    tracing::info!(user_id = auth.user_id, %url, "Image uploaded");
    Ok(Json(UploadResult { url }))
}

/// POST /api/upload/audio
///
/// Forward a single `audio` file to the blob host and return its public URL.
pub async fn upload_audio(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<UploadResult>> {
    let file = read_file_field(multipart, "audio").await?;
    let tmp_path = spool(&state.config.upload.tmp_dir, &file).await?;

    let result = forward_audio(&state, &tmp_path, &file).await;

    cleanup(&tmp_path).await;

    let url = result?;
    tracing::info!(user_id = auth.user_id, %url, "Audio uploaded");
    Ok(Json(UploadResult { url }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Pull the named file field out of a multipart body.
///
/// Missing field (or a request with no file at all) is a 400.
async fn read_file_field(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| field_name.to_string());
        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
            .to_vec();

        return Ok(UploadedFile {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::BadRequest(format!(
        "No {field_name} file provided"
    )))
}

/// Spool an uploaded file to a unique temp path under `tmp_dir`.
async fn spool(tmp_dir: &str, file: &UploadedFile) -> Result<std::path::PathBuf, AppError> {
    tokio::fs::create_dir_all(tmp_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let tmp_path = std::path::Path::new(tmp_dir).join(Uuid::new_v4().to_string());
    tokio::fs::write(&tmp_path, &file.bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to spool upload: {e}")))?;

    Ok(tmp_path)
}

/// Remove a spooled temp file. Removal failures are logged, not surfaced.
async fn cleanup(tmp_path: &std::path::Path) {
    if let Err(e) = tokio::fs::remove_file(tmp_path).await {
        tracing::warn!(path = %tmp_path.display(), error = %e, "Failed to remove temp upload");
    }
}

/// Read the spooled file back and forward it to the image host.
async fn forward_image(
    state: &AppState,
    tmp_path: &std::path::Path,
    file: &UploadedFile,
) -> Result<String, AppError> {
    let bytes = tokio::fs::read(tmp_path)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to read spooled upload: {e}")))?;

    let url = state.image_host.upload(&file.file_name, bytes).await?;
    Ok(url)
}

/// Read the spooled file back and forward it to the audio blob host.
async fn forward_audio(
    state: &AppState,
    tmp_path: &std::path::Path,
    file: &UploadedFile,
) -> Result<String, AppError> {
    let bytes = tokio::fs::read(tmp_path)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to read spooled upload: {e}")))?;

    let url = state
        .audio_host
        .upload(&file.file_name, &file.content_type, bytes)
        .await?;
    Ok(url)
}
