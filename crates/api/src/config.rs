use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Third-party upload host configuration.
    pub upload: UploadConfig,
}

/// Configuration for the upload proxy's third-party hosts.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Image host upload endpoint.
    pub image_api_url: String,
    /// Image host API key.
    pub image_api_key: String,
    /// Audio blob host upload endpoint.
    pub audio_api_url: String,
    /// Audio blob host API key.
    pub audio_api_key: String,
    /// Directory for spooling multipart bodies to disk before forwarding.
    pub tmp_dir: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                            |
    /// | `PORT`                 | `5000`                               |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `IMAGE_HOST_URL`       | `https://api.imgbb.com/1/upload`     |
    /// | `IMAGE_HOST_API_KEY`   | (empty)                              |
    /// | `AUDIO_HOST_URL`       | `https://api.bytescale.com/v2/uploads/form_data` |
    /// | `AUDIO_HOST_API_KEY`   | (empty)                              |
    /// | `UPLOAD_TMP_DIR`       | `uploads`                            |
    ///
    /// JWT settings are loaded by [`JwtConfig::from_env`], which panics if
    /// `JWT_SECRET` is missing.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let upload = UploadConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            upload,
        }
    }
}

impl UploadConfig {
    /// Load upload host configuration from environment variables.
    ///
    /// API keys default to empty strings so a dev setup without upload
    /// credentials still boots; the hosts will reject forwarded requests.
    pub fn from_env() -> Self {
        let image_api_url = std::env::var("IMAGE_HOST_URL")
            .unwrap_or_else(|_| "https://api.imgbb.com/1/upload".into());
        let image_api_key = std::env::var("IMAGE_HOST_API_KEY").unwrap_or_default();

        let audio_api_url = std::env::var("AUDIO_HOST_URL")
            .unwrap_or_else(|_| "https://api.bytescale.com/v2/uploads/form_data".into());
        let audio_api_key = std::env::var("AUDIO_HOST_API_KEY").unwrap_or_default();

        let tmp_dir = std::env::var("UPLOAD_TMP_DIR").unwrap_or_else(|_| "uploads".into());

        Self {
            image_api_url,
            image_api_key,
            audio_api_url,
            audio_api_key,
            tmp_dir,
        }
    }
}
