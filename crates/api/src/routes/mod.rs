pub mod auth;
pub mod health;
pub mod notes;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                 register (public)
/// /auth/login                  login (public)
/// /auth/me                     current user (requires auth)
///
/// /notes                       list, create
/// /notes/{id}                  get, patch (partial), delete
/// /notes/{id}/favorite         patch favorite flag only
///
/// /upload/image                forward image to image host
/// /upload/audio                forward audio to blob host
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/notes", notes::router())
        .nest("/upload", uploads::router())
}
