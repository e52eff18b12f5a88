//! Handlers for the `/notes` resource.
//!
//! Every operation is scoped to the authenticated owner: the repository
//! filters on `user_id` as part of the lookup, so a note owned by another
//! user 404s exactly like a note that does not exist.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use voxnotes_core::error::CoreError;
use voxnotes_core::notes::{validate_content, validate_duration, validate_images, validate_title};
use voxnotes_core::types::DbId;
use voxnotes_db::models::note::{CreateNote, UpdateNote};
use voxnotes_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PATCH /api/notes/{id}/favorite`.
#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub favorite: bool,
}

/// Response payload for `DELETE /api/notes/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedNote {
    pub id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/notes
///
/// List the caller's notes, newest first. Unbounded: the dashboard fetches
/// everything and narrows locally.
pub async fn list_notes(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let notes = NoteRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse::new(notes)))
}

/// POST /api/notes
///
/// Create a note for the caller. Title and content are required; images
/// default to empty, favorite to false, duration to "".
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateNote>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::BadRequest)?;
    validate_content(&input.content).map_err(AppError::BadRequest)?;
    if let Some(ref images) = input.images {
        validate_images(images).map_err(AppError::BadRequest)?;
    }
    if let Some(ref duration) = input.duration {
        validate_duration(duration).map_err(AppError::BadRequest)?;
    }

    let note = NoteRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, note_id = note.id, "Note created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(note))))
}

/// GET /api/notes/{id}
///
/// Get a single caller-owned note.
pub async fn get_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    Ok(Json(DataResponse::new(note)))
}

/// PATCH /api/notes/{id}
///
/// Partial update: only fields present in the body change; absent fields
/// are left untouched. Present title/content must still be valid.
pub async fn update_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_title(title).map_err(AppError::BadRequest)?;
    }
    if let Some(ref content) = input.content {
        validate_content(content).map_err(AppError::BadRequest)?;
    }
    if let Some(ref images) = input.images {
        validate_images(images).map_err(AppError::BadRequest)?;
    }
    if let Some(ref duration) = input.duration {
        validate_duration(duration).map_err(AppError::BadRequest)?;
    }

    let note = NoteRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    tracing::info!(user_id = auth.user_id, note_id = note.id, "Note updated");

    Ok(Json(DataResponse::new(note)))
}

/// PATCH /api/notes/{id}/favorite
///
/// Replace only the favorite flag; every other field stays as it was.
pub async fn set_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<FavoriteRequest>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::set_favorite(&state.pool, id, auth.user_id, input.favorite)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    Ok(Json(DataResponse::new(note)))
}

/// DELETE /api/notes/{id}
///
/// Delete a caller-owned note, returning the deleted id.
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted_id = NoteRepo::delete(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    tracing::info!(user_id = auth.user_id, note_id = deleted_id, "Note deleted");

    Ok(Json(DataResponse::new(DeletedNote { id: deleted_id })))
}
