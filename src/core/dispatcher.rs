use crate::core::{ApiResponse, Dispatch, Method, RequestDescriptor};
use crate::domain::model::BASE_URL;
use crate::utils::error::Result;
use crate::utils::validation::validate_json_document;
use async_trait::async_trait;
use reqwest::Client;

/// Sends one request against the base host. No timeout, no retries.
pub struct RequestDispatcher {
    client: Client,
    base_url: String,
}

impl RequestDispatcher {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for RequestDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Dispatch for RequestDispatcher {
    async fn dispatch(&self, request: &RequestDescriptor) -> Result<ApiResponse> {
        let url = request.url(&self.base_url);

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => {
                // 先解析 payload，格式錯誤時不發出任何請求
                let payload = request
                    .data
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .map(validate_json_document)
                    .transpose()?;

                match payload {
                    Some(body) => self.client.post(&url).json(&body),
                    None => self.client.post(&url),
                }
            }
        };

        tracing::debug!("Sending {} request to: {}", request.method, url);
        let response = builder.send().await?;

        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        tracing::debug!("Received {} bytes", body.len());

        Ok(ApiResponse { status, body })
    }
}
