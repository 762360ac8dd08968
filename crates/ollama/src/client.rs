use std::time::Duration;

use crate::error::Error;
use crate::types::{GenerateRequest, GenerateResponse, parse_response};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// `timeout` bounds the whole request, from connect to the last body byte.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse, Error> {
        let url = format!("{}/api/generate", self.base_url);

        tracing::debug!(
            model = %req.model,
            prompt_chars = req.prompt.len(),
            "ollama_generate_request"
        );

        let response = self.http.post(&url).json(req).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        parse_response(&bytes)
    }
}
