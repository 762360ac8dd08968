use serde::Deserialize;

use crate::error::Error;
use crate::types::{Transcript, WordItem, WordKind};

/// Transcription job output, as written by the transcription service.
///
/// Only the fields the highlight pipeline needs are modeled; everything else
/// in the document (speaker labels, job metadata, ...) is ignored.
///
/// ```ignore
/// let doc = TranscriptionDocument::from_slice(&bytes)?;
/// let transcript = doc.into_transcript()?;
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionDocument {
    pub results: TranscriptionResults,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptionResults {
    #[serde(default)]
    pub transcripts: Vec<TranscriptText>,
    #[serde(default)]
    pub items: Vec<TranscriptionItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptText {
    pub transcript: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionItem {
    #[serde(rename = "type")]
    pub kind: WordKind,
    /// Numeric string, seconds. Absent on punctuation.
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Alternative {
    pub content: String,
    #[serde(default)]
    pub confidence: Option<String>,
}

impl TranscriptionDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The service's own flat rendering of the transcript, if present.
    pub fn transcript_text(&self) -> Option<&str> {
        self.results
            .transcripts
            .first()
            .map(|t| t.transcript.as_str())
    }

    pub fn into_transcript(self) -> Result<Transcript, Error> {
        let items = self
            .results
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_word_item(index))
            .collect::<Result<Vec<_>, _>>()?;

        Transcript::new(items)
    }
}

impl TranscriptionItem {
    fn into_word_item(self, index: usize) -> Result<WordItem, Error> {
        let content = self
            .alternatives
            .into_iter()
            .next()
            .ok_or(Error::MissingAlternative { index })?
            .content;

        match self.kind {
            WordKind::Punctuation => Ok(WordItem::punctuation(content)),
            WordKind::Pronunciation => {
                let start_time = parse_seconds(index, "start_time", self.start_time)?;
                let end_time = parse_seconds(index, "end_time", self.end_time)?;
                Ok(WordItem::word(content, start_time, end_time))
            }
        }
    }
}

fn parse_seconds(index: usize, field: &'static str, raw: Option<String>) -> Result<f64, Error> {
    let raw = raw.ok_or(Error::MissingTimestamp { index, field })?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidTimestamp {
            index,
            field,
            value: raw,
        }),
    }
}

impl Transcript {
    /// Parses a transcription JSON document straight into a [`Transcript`].
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, Error> {
        TranscriptionDocument::from_slice(bytes)?.into_transcript()
    }
}
