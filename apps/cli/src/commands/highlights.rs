use std::path::PathBuf;
use std::time::Duration;

use clipfarm_highlight::{HighlightConfig, HighlightExtractor, OllamaGenerator};

use crate::env::Env;

#[derive(clap::Args)]
pub struct Args {
    /// Transcription JSON document.
    pub transcript: PathBuf,

    #[arg(long, env = "CLIPFARM_CLIP_COUNT", default_value_t = HighlightConfig::DEFAULT_CLIP_COUNT)]
    pub count: usize,

    /// Seconds.
    #[arg(long, env = "CLIPFARM_MIN_DURATION", default_value_t = HighlightConfig::DEFAULT_MIN_DURATION)]
    pub min_duration: f64,

    /// Seconds.
    #[arg(long, env = "CLIPFARM_MAX_DURATION", default_value_t = HighlightConfig::DEFAULT_MAX_DURATION)]
    pub max_duration: f64,

    /// Overrides `OLLAMA_MODEL`.
    #[arg(long)]
    pub model: Option<String>,

    /// Overrides `OLLAMA_BASE_URL`.
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, env = "CLIPFARM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

pub async fn run(args: Args, env: Env) -> anyhow::Result<()> {
    let transcript = super::read_transcript(&args.transcript)?;

    let timeout = Duration::from_secs(args.timeout_secs);
    let config = HighlightConfig::default()
        .with_clip_count(args.count)
        .with_duration_bounds(args.min_duration, args.max_duration)
        .with_request_timeout(timeout);

    let base_url = args.base_url.unwrap_or(env.ollama_base_url);
    let model = args.model.unwrap_or(env.ollama_model);
    tracing::info!(%base_url, %model, "using_generator");

    let client = clipfarm_ollama::Client::with_timeout(base_url, timeout)?;
    let extractor = HighlightExtractor::new(OllamaGenerator::new(client, model), config)?;

    let clips = extractor.extract(&transcript).await;
    println!("{}", serde_json::to_string_pretty(&clips)?);
    Ok(())
}
