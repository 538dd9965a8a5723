use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::modules::convert::interface::{ConvertApi, Result};
use crate::modules::convert::schema::{ApiResponse, ConvertRequest, CONVERT_PATH};

/// HTTP client for the converter's /api/convert endpoint
pub struct HttpConvertClient {
    client: Client,
    base_url: String,
}

impl HttpConvertClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Client whose requests fail once `timeout` elapses.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self::with_client(client, base_url)
    }

    fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CONVERT_PATH)
    }
}

#[async_trait]
impl ConvertApi for HttpConvertClient {
    async fn post_convert(&self, request: &ConvertRequest) -> Result<ApiResponse> {
        let url = self.endpoint();

        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        // The body is raw bytes here; JSON vs file is decided by the caller.
        let body = response.bytes().await?;

        tracing::debug!("POST {} -> {} ({} bytes)", url, status, body.len());

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}
