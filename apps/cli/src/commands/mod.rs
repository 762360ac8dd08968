pub mod captions;
pub mod highlights;

use std::path::Path;

use anyhow::Context;
use clipfarm_transcript::Transcript;

pub fn read_transcript(path: &Path) -> anyhow::Result<Transcript> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let transcript = Transcript::from_json_slice(&bytes)
        .with_context(|| format!("invalid transcription document {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        words = transcript.len(),
        "transcript_loaded"
    );
    Ok(transcript)
}
