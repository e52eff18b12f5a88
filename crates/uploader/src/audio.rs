//! REST client for the external audio blob host.
//!
//! Posts multipart form data straight to the host's upload endpoint with a
//! bearer API key and returns the URL of the stored file.

use reqwest::multipart;
use serde::Deserialize;

use crate::error::UploadError;

/// HTTP client for the audio blob-hosting API.
pub struct AudioHostClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// Response returned by the blob host on success.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AudioHostResponse {
    file_url: String,
}

impl AudioHostClient {
    /// Create a new client for the audio host.
    ///
    /// * `api_url` - Upload endpoint, e.g. `https://api.bytescale.com/v2/uploads/form_data`.
    /// * `api_key` - Account API key, sent as a bearer token.
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Upload one audio blob, returning its public URL.
    pub async fn upload(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UploadError::from_response(response).await);
        }

        let parsed: AudioHostResponse = response.json().await?;
        Ok(parsed.file_url)
    }
}
