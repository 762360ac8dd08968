use std::sync::LazyLock;

use regex::Regex;

use crate::config::HighlightConfig;
use crate::error::Error;
use crate::generator::Generator;

/// `SEGMENT <n>:` in any case, with any number and loose spacing.
static SEGMENT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsegment\s*\d+\s*:").expect("valid segment marker regex"));

const DECORATION: &[char] = &['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '*', '`'];

/// Generator-suggested highlight text, not yet anchored to the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSegment {
    pub text: String,
}

impl CandidateSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

pub fn build_prompt(
    transcript_text: &str,
    clip_count: usize,
    min_duration: f64,
    max_duration: f64,
) -> String {
    indoc::formatdoc! {"
        You are an editor picking highlight clips from a video transcript.
        Choose exactly {clip_count} of the most engaging passages. Each passage should take about {min_duration} to {max_duration} seconds to say.
        Copy every passage word for word from the transcript. Do not summarize, reword, or add commentary.
        Reply with one line per passage and nothing else, in this format:
        SEGMENT 1: <exact transcript text>
        SEGMENT 2: <exact transcript text>

        Transcript:
        {transcript_text}
    "}
}

/// Splits a generator reply on its `SEGMENT <n>:` markers.
///
/// Anything before the first marker is preamble and dropped. Each block is
/// whitespace-collapsed and stripped of wrapping quotes; empty blocks are
/// discarded. Order of appearance is preserved.
pub fn parse_segments(reply: &str) -> Vec<CandidateSegment> {
    SEGMENT_MARKER
        .split(reply)
        .skip(1)
        .filter_map(|block| {
            let collapsed = block.split_whitespace().collect::<Vec<_>>().join(" ");
            let text = collapsed.trim_matches(|c: char| c.is_whitespace() || DECORATION.contains(&c));
            (!text.is_empty()).then(|| CandidateSegment::new(text))
        })
        .collect()
}

/// Sends one highlight request and turns the reply into candidates.
///
/// Failure never propagates: a generator error, a non-success reply or a
/// timeout all yield an empty list. Retrying is the caller's business.
pub struct HighlightRequester<'a, G: ?Sized> {
    generator: &'a G,
    config: &'a HighlightConfig,
}

impl<'a, G: Generator + ?Sized> HighlightRequester<'a, G> {
    pub fn new(generator: &'a G, config: &'a HighlightConfig) -> Self {
        Self { generator, config }
    }

    pub async fn request(&self, transcript_text: &str) -> Vec<CandidateSegment> {
        let prompt = build_prompt(
            transcript_text,
            self.config.clip_count,
            self.config.min_duration,
            self.config.max_duration,
        );

        match self.try_request(&prompt).await {
            Ok(reply) => {
                let candidates = parse_segments(&reply);
                tracing::info!(
                    requested = self.config.clip_count,
                    received = candidates.len(),
                    "highlight_candidates_received"
                );
                candidates
            }
            Err(e) => {
                tracing::warn!(error = %e, "highlight_request_failed");
                Vec::new()
            }
        }
    }

    async fn try_request(&self, prompt: &str) -> Result<String, Error> {
        let timeout = self.config.request_timeout;
        tokio::time::timeout(timeout, self.generator.generate(prompt))
            .await
            .map_err(|_| Error::GeneratorUnavailable(format!("timed out after {timeout:?}")))?
    }
}
