use std::sync::Arc;

use voxnotes_uploader::{AudioHostClient, ImageHostClient};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: voxnotes_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Client for the third-party image host.
    pub image_host: Arc<ImageHostClient>,
    /// Client for the third-party audio blob host.
    pub audio_host: Arc<AudioHostClient>,
}

impl AppState {
    /// Build state from a pool and config, constructing the upload clients
    /// from the config's host settings.
    pub fn new(pool: voxnotes_db::DbPool, config: ServerConfig) -> Self {
        let image_host = Arc::new(ImageHostClient::new(
            config.upload.image_api_url.clone(),
            config.upload.image_api_key.clone(),
        ));
        let audio_host = Arc::new(AudioHostClient::new(
            config.upload.audio_api_url.clone(),
            config.upload.audio_api_key.clone(),
        ));

        Self {
            pool,
            config: Arc::new(config),
            image_host,
            audio_host,
        }
    }
}
