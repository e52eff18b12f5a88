//! Repository for the `notes` table.
//!
//! Every query is owner-scoped: the `user_id` filter is part of the lookup
//! itself, so a note owned by someone else is indistinguishable from a note
//! that does not exist.

use sqlx::PgPool;
use voxnotes_core::types::DbId;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for notes queries.
const COLUMNS: &str =
    "id, user_id, title, content, images, recording_url, duration, favorite, \
     created_at, updated_at";

/// Provides owner-scoped CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Create a new note for the given owner, returning the created row.
    ///
    /// Absent optional fields take the schema defaults: empty image list,
    /// empty duration, not favorite.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let images = input.images.clone().unwrap_or_default();
        let duration = input.duration.as_deref().unwrap_or("");
        let favorite = input.favorite.unwrap_or(false);

        let query = format!(
            "INSERT INTO notes (user_id, title, content, images, recording_url, duration, favorite)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&images)
            .bind(&input.recording_url)
            .bind(duration)
            .bind(favorite)
            .fetch_one(pool)
            .await
    }

    /// Find a note by ID, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all notes for an owner, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update to an owner's note, returning the updated row.
    ///
    /// Only non-`None` fields in `input` are applied; everything else is
    /// left untouched. Returns `None` if the note is absent or owned by
    /// another user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                images = COALESCE($5, images),
                recording_url = COALESCE($6, recording_url),
                duration = COALESCE($7, duration),
                favorite = COALESCE($8, favorite),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.images)
            .bind(&input.recording_url)
            .bind(&input.duration)
            .bind(input.favorite)
            .fetch_optional(pool)
            .await
    }

    /// Replace only the favorite flag on an owner's note.
    pub async fn set_favorite(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        favorite: bool,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET favorite = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .bind(favorite)
            .fetch_optional(pool)
            .await
    }

    /// Delete an owner's note, returning the deleted id.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("DELETE FROM notes WHERE id = $1 AND user_id = $2 RETURNING id")
                .bind(id)
                .bind(user_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(deleted_id,)| deleted_id))
    }
}
