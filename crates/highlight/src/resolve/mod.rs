//! # Position resolution
//!
//! Anchors generator text to transcript positions. The generator is asked for
//! verbatim excerpts but routinely paraphrases, drops fillers or re-punctuates,
//! so exact substring search is not enough.
//!
//! Each edge of a segment is resolved on its own by walking an ordered chain of
//! [`Matcher`]s, coarsest last:
//!
//! | tier          | start edge                    | end edge                              |
//! |---------------|-------------------------------|---------------------------------------|
//! | trigram       | earliest hit in leading window | latest hit in trailing window, + 2   |
//! | bigram        | earliest hit in leading window | latest hit in trailing window, + 1   |
//! | unigram       | earliest hit of a content word | latest hit of a content word, + 1    |
//! | time estimate | -                             | word nearest `start + target duration` |
//!
//! A start that no tier can place is a [`Error::NoMatch`]: a wrong start cannot
//! be repaired later, while a guessed end only costs confidence.

mod estimate;
mod ngram;
mod unigram;

use crate::config::HighlightConfig;
use crate::error::Error;
use crate::index::TranscriptIndex;
use crate::text::tokenize;

pub use estimate::TimeEstimateMatcher;
pub use ngram::NgramMatcher;
pub use unigram::{UNIGRAM_MIN_CHARS, UNIGRAM_PROBE_WORDS, UnigramMatcher, word_similarity};

/// Words examined at each edge by the n-gram tiers.
pub const EDGE_WINDOW: usize = 5;
/// Segments shorter than this are rejected outright.
pub const MIN_SEGMENT_WORDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Trigram,
    Bigram,
    Unigram,
    TimeEstimate,
}

/// Everything a matcher may look at for one edge of one segment.
#[derive(Debug, Clone, Copy)]
pub struct MatchQuery<'a> {
    pub index: &'a TranscriptIndex,
    /// Normalized segment words.
    pub tokens: &'a [String],
    pub edge: Edge,
    /// Already-resolved start position. Set only when resolving the end.
    pub anchor: Option<usize>,
}

impl<'a> MatchQuery<'a> {
    /// Leading or trailing [`EDGE_WINDOW`] tokens, depending on the edge.
    pub fn window(&self) -> &'a [String] {
        let tokens = self.tokens;
        let len = tokens.len().min(EDGE_WINDOW);
        match self.edge {
            Edge::Start => &tokens[..len],
            Edge::End => &tokens[tokens.len() - len..],
        }
    }
}

/// One tier of the fallback chain.
pub trait Matcher: Send + Sync {
    fn tier(&self) -> Tier;

    /// Position for the query's edge, or `None` to defer to the next tier.
    fn locate(&self, query: &MatchQuery<'_>) -> Option<usize>;
}

/// Inclusive span of pronunciation positions plus the tier that placed each end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub start: usize,
    pub end: usize,
    pub start_tier: Tier,
    pub end_tier: Tier,
}

pub struct PositionResolver {
    start_chain: Vec<Box<dyn Matcher>>,
    end_chain: Vec<Box<dyn Matcher>>,
}

impl PositionResolver {
    /// Standard chains: trigram, bigram, unigram for the start; the same plus
    /// a time estimate for the end.
    pub fn new(config: &HighlightConfig) -> Self {
        Self {
            start_chain: vec![
                Box::new(NgramMatcher::trigram()),
                Box::new(NgramMatcher::bigram()),
                Box::new(UnigramMatcher::new(config.similarity_threshold)),
            ],
            end_chain: vec![
                Box::new(NgramMatcher::trigram()),
                Box::new(NgramMatcher::bigram()),
                Box::new(UnigramMatcher::new(config.similarity_threshold)),
                Box::new(TimeEstimateMatcher::new(config.target_duration())),
            ],
        }
    }

    pub fn from_chains(
        start_chain: Vec<Box<dyn Matcher>>,
        end_chain: Vec<Box<dyn Matcher>>,
    ) -> Self {
        Self {
            start_chain,
            end_chain,
        }
    }

    pub fn resolve(&self, index: &TranscriptIndex, text: &str) -> Result<Resolution, Error> {
        let tokens = tokenize(text);
        if tokens.len() < MIN_SEGMENT_WORDS {
            return Err(Error::TooShort {
                words: tokens.len(),
                min: MIN_SEGMENT_WORDS,
            });
        }

        let mut query = MatchQuery {
            index,
            tokens: &tokens,
            edge: Edge::Start,
            anchor: None,
        };
        let (start, start_tier) = run_chain(&self.start_chain, &query).ok_or(Error::NoMatch)?;

        query.edge = Edge::End;
        query.anchor = Some(start);
        let (end, end_tier) = run_chain(&self.end_chain, &query).ok_or(Error::NoMatch)?;

        tracing::debug!(
            start,
            end,
            start_tier = ?start_tier,
            end_tier = ?end_tier,
            "segment_resolved"
        );

        Ok(Resolution {
            start,
            end,
            start_tier,
            end_tier,
        })
    }
}

fn run_chain(chain: &[Box<dyn Matcher>], query: &MatchQuery<'_>) -> Option<(usize, Tier)> {
    chain.iter().find_map(|matcher| {
        let found = matcher.locate(query);
        tracing::trace!(edge = ?query.edge, tier = ?matcher.tier(), ?found, "matcher_attempt");
        found.map(|pos| (pos, matcher.tier()))
    })
}
