use std::future::Future;
use std::pin::Pin;

use clipfarm_ollama::GenerateRequest;

use crate::error::Error;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Text-generation capability: one prompt in, the model's whole reply out.
///
/// Any transport problem surfaces as [`Error::GeneratorUnavailable`]. The
/// trait is object-safe via the explicit `BoxFuture` return type, so tests
/// and callers can swap in `dyn Generator` stubs.
pub trait Generator: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, Error>>;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, Error>> {
        (**self).generate(prompt)
    }
}

/// [`Generator`] backed by an Ollama-compatible `/api/generate` endpoint.
pub struct OllamaGenerator {
    client: clipfarm_ollama::Client,
    model: String,
}

impl OllamaGenerator {
    pub fn new(client: clipfarm_ollama::Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Generator for OllamaGenerator {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, Error>> {
        Box::pin(async move {
            let request = GenerateRequest::new(self.model.as_str(), prompt);
            let response = self
                .client
                .generate(&request)
                .await
                .map_err(|e| Error::GeneratorUnavailable(e.to_string()))?;
            Ok(response.response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn ollama_failures_become_generator_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
            .mount(&server)
            .await;

        let client = clipfarm_ollama::Client::new(server.uri()).unwrap();
        let generator = OllamaGenerator::new(client, "missing");

        match generator.generate("prompt").await {
            Err(Error::GeneratorUnavailable(reason)) => assert!(reason.contains("404")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn ollama_reply_text_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"response":"SEGMENT 1: hi"}"#),
            )
            .mount(&server)
            .await;

        let client = clipfarm_ollama::Client::new(server.uri()).unwrap();
        let generator = OllamaGenerator::new(client, "llama3");

        assert_eq!(generator.model(), "llama3");
        assert_eq!(generator.generate("prompt").await.unwrap(), "SEGMENT 1: hi");
    }
}
