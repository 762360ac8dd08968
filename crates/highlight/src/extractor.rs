use clipfarm_transcript::Transcript;

use crate::clip::{ClipAssembler, ResolvedClip};
use crate::config::HighlightConfig;
use crate::error::Error;
use crate::generator::Generator;
use crate::index::TranscriptIndex;
use crate::request::{CandidateSegment, HighlightRequester};
use crate::resolve::PositionResolver;
use crate::scoring::ConfidenceScorer;

/// Resolution-to-assembly half of the pipeline. Needs no generator.
pub struct Aligner {
    config: HighlightConfig,
    resolver: PositionResolver,
}

impl Aligner {
    pub fn new(config: HighlightConfig) -> Result<Self, Error> {
        let resolver = PositionResolver::new(&config);
        Self::with_resolver(config, resolver)
    }

    pub fn with_resolver(
        config: HighlightConfig,
        resolver: PositionResolver,
    ) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config, resolver })
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Resolves, scores and collects each candidate in order. Candidates that
    /// fail are logged and skipped.
    pub fn align(
        &self,
        index: &TranscriptIndex,
        candidates: &[CandidateSegment],
    ) -> Vec<ResolvedClip> {
        let mut assembler = ClipAssembler::new(index, ConfidenceScorer::from_config(&self.config));

        for (segment, candidate) in candidates.iter().enumerate() {
            let outcome = self
                .resolver
                .resolve(index, &candidate.text)
                .and_then(|resolution| assembler.push(&resolution).map(|_| ()));

            match outcome {
                Ok(()) => {}
                Err(e @ Error::TooShort { .. }) => {
                    tracing::debug!(segment, reason = %e, "segment_skipped");
                }
                Err(e) => {
                    tracing::warn!(segment, reason = %e, "segment_skipped");
                }
            }
        }

        tracing::info!(
            candidates = candidates.len(),
            clips = assembler.len(),
            "highlights_aligned"
        );
        assembler.finish()
    }
}

/// Full pipeline: index the transcript, ask the generator for highlights,
/// anchor them back onto the transcript.
///
/// Never fails once constructed. Generator trouble or a transcript with no
/// usable segments yields an empty list.
pub struct HighlightExtractor<G> {
    generator: G,
    aligner: Aligner,
}

impl<G: Generator> HighlightExtractor<G> {
    pub fn new(generator: G, config: HighlightConfig) -> Result<Self, Error> {
        Ok(Self {
            generator,
            aligner: Aligner::new(config)?,
        })
    }

    pub fn config(&self) -> &HighlightConfig {
        self.aligner.config()
    }

    pub async fn extract(&self, transcript: &Transcript) -> Vec<ResolvedClip> {
        if transcript.is_empty() {
            tracing::info!("empty_transcript");
            return Vec::new();
        }

        let index = TranscriptIndex::build(transcript);
        let candidates = HighlightRequester::new(&self.generator, self.aligner.config())
            .request(&transcript.full_text())
            .await;

        self.extract_from_candidates(&index, &candidates)
    }

    pub fn extract_from_candidates(
        &self,
        index: &TranscriptIndex,
        candidates: &[CandidateSegment],
    ) -> Vec<ResolvedClip> {
        self.aligner.align(index, candidates)
    }
}
