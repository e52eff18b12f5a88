//! Route definitions for the upload proxy.
//!
//! Mounted at `/upload` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Upload routes.
///
/// ```text
/// POST /image  -> upload_image (multipart field "image")
/// POST /audio  -> upload_audio (multipart field "audio")
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/image", post(uploads::upload_image))
        .route("/audio", post(uploads::upload_audio))
}
