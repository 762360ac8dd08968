use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Body of `POST /api/generate`. Streaming is always off: the caller wants
/// the whole reply in one response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}

pub(crate) fn parse_response(bytes: &[u8]) -> Result<GenerateResponse, Error> {
    match serde_json::from_slice::<GenerateResponse>(bytes) {
        Ok(response) => Ok(response),
        Err(_) => {
            let error_resp: ErrorResponse = serde_json::from_slice(bytes)?;
            Err(Error::Api(error_resp.error))
        }
    }
}
