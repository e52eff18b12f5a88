//! REST client for the external image host.
//!
//! The host accepts a multipart `image` part with the API key passed as a
//! query parameter and returns the public URL of the stored image.

use reqwest::multipart;
use serde::Deserialize;

use crate::error::UploadError;

/// HTTP client for the image-hosting API.
pub struct ImageHostClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// Envelope returned by the image host on success.
#[derive(Debug, Deserialize)]
struct ImageHostResponse {
    data: ImageHostData,
}

#[derive(Debug, Deserialize)]
struct ImageHostData {
    url: String,
}

impl ImageHostClient {
    /// Create a new client for the image host.
    ///
    /// * `api_url` - Upload endpoint, e.g. `https://api.imgbb.com/1/upload`.
    /// * `api_key` - Account API key, sent as the `key` query parameter.
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Upload one image, returning its public URL.
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UploadError::from_response(response).await);
        }

        let parsed: ImageHostResponse = response.json().await?;
        Ok(parsed.data.url)
    }
}
