use std::path::PathBuf;

use anyhow::Context;
use clipfarm_transcript::{build_captions, render_srt};

#[derive(clap::Args)]
pub struct Args {
    /// Transcription JSON document.
    pub transcript: PathBuf,

    /// Write SRT here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let transcript = super::read_transcript(&args.transcript)?;
    let captions = build_captions(&transcript);
    let srt = render_srt(&captions);

    match args.output {
        Some(path) => {
            std::fs::write(&path, srt)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), captions = captions.len(), "captions_written");
        }
        None => print!("{srt}"),
    }
    Ok(())
}
