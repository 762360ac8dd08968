use serde::Deserialize;

fn default_ollama_base_url() -> String {
    clipfarm_ollama::DEFAULT_BASE_URL.to_string()
}

fn default_ollama_model() -> String {
    "llama3".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Env {
    #[serde(default = "default_ollama_base_url")]
    pub ollama_base_url: String,
    #[serde(default = "default_ollama_model")]
    pub ollama_model: String,
}

/// Reads the process environment after layering in `.env` from the working
/// directory, if there is one.
pub fn load() -> anyhow::Result<Env> {
    let _ = dotenvy::dotenv();
    Ok(envy::from_env()?)
}
