/// Errors from the upstream file-hosting APIs.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The host returned a non-2xx status code.
    #[error("Upload host error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl UploadError {
    /// Turn a non-2xx response into [`UploadError::ApiError`], preserving
    /// the status and body for the caller's error mapping.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        UploadError::ApiError { status, body }
    }
}
