use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::index::TranscriptIndex;
use crate::resolve::Resolution;
use crate::scoring::{ConfidenceScorer, round2};

/// A highlight anchored to transcript time. Times in seconds, two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedClip {
    pub start_time: f64,
    pub end_time: f64,
    pub duration: f64,
    pub text: String,
    pub confidence: f64,
}

/// Turns resolved spans into scored clips, keeping arrival order.
#[derive(Debug)]
pub struct ClipAssembler<'a> {
    index: &'a TranscriptIndex,
    scorer: ConfidenceScorer,
    clips: Vec<ResolvedClip>,
}

impl<'a> ClipAssembler<'a> {
    pub fn new(index: &'a TranscriptIndex, scorer: ConfidenceScorer) -> Self {
        Self {
            index,
            scorer,
            clips: Vec::new(),
        }
    }

    /// Builds the clip for `resolution` and appends it.
    ///
    /// The clip is cut at the onset of the end word, so a span whose end word
    /// starts no later than its start word is rejected as inverted.
    pub fn push(&mut self, resolution: &Resolution) -> Result<&ResolvedClip, Error> {
        let first = self.index.word(resolution.start).ok_or(Error::NoMatch)?;
        let last = self.index.word(resolution.end).ok_or(Error::NoMatch)?;

        let start_time = round2(first.start_time);
        let end_time = round2(last.start_time);
        if end_time <= start_time {
            return Err(Error::InvertedSpan {
                start_time,
                end_time,
            });
        }

        let duration = round2(end_time - start_time);
        self.clips.push(ResolvedClip {
            start_time,
            end_time,
            duration,
            text: self.index.span_text(resolution.start, resolution.end),
            confidence: self.scorer.score(duration),
        });
        Ok(&self.clips[self.clips.len() - 1])
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn finish(self) -> Vec<ResolvedClip> {
        self.clips
    }
}
