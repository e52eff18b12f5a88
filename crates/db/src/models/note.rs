//! Note entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voxnotes_core::dashboard::NoteQuery;
use voxnotes_core::types::{DbId, Timestamp};

/// A row from the `notes` table.
///
/// Serializes camelCase (`recordingUrl`, `createdAt`, ...) to match the
/// dashboard client's wire contract.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
    pub recording_url: Option<String>,
    pub duration: String,
    pub favorite: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NoteQuery for Note {
    fn title(&self) -> &str {
        &self.title
    }
    fn content(&self) -> &str {
        &self.content
    }
    fn favorite(&self) -> bool {
        self.favorite
    }
    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// DTO for creating a new note. Optional fields take the schema defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNote {
    pub title: String,
    pub content: String,
    pub images: Option<Vec<String>>,
    pub recording_url: Option<String>,
    pub duration: Option<String>,
    pub favorite: Option<bool>,
}

/// DTO for a partial note update. Only present fields are applied.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub images: Option<Vec<String>>,
    pub recording_url: Option<String>,
    pub duration: Option<String>,
    pub favorite: Option<bool>,
}
