use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordKind {
    Pronunciation,
    Punctuation,
}

/// One token of a word-level transcript, as delivered by the transcription
/// service.
///
/// Only pronunciation items carry timing. A punctuation item belongs to the
/// pronunciation item before it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordItem {
    pub content: String,
    pub kind: WordKind,
    /// Seconds from the start of the media. `None` for punctuation.
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
}

impl WordItem {
    pub fn word(content: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            content: content.into(),
            kind: WordKind::Pronunciation,
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }

    pub fn punctuation(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: WordKind::Punctuation,
            start_time: None,
            end_time: None,
        }
    }

    pub fn is_pronunciation(&self) -> bool {
        self.kind == WordKind::Pronunciation
    }
}

/// A pronunciation item with its timing unwrapped and any punctuation that
/// followed it attached.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SpokenWord {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
    /// Punctuation items that immediately followed this word, concatenated.
    pub punctuation: String,
}

impl SpokenWord {
    pub fn punctuated(&self) -> String {
        format!("{}{}", self.text, self.punctuation)
    }
}

/// Ordered word-level transcript.
///
/// Positions used throughout the highlight pipeline index into [`Transcript::words`],
/// the pronunciation-only view, never into the raw item list.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    items: Vec<WordItem>,
    words: Vec<SpokenWord>,
}

impl Transcript {
    /// Validates timing and derives the pronunciation-only view.
    ///
    /// Pronunciation items must carry finite timestamps and their start times
    /// must not decrease.
    pub fn new(items: Vec<WordItem>) -> Result<Self, Error> {
        let mut words: Vec<SpokenWord> = Vec::new();

        for (index, item) in items.iter().enumerate() {
            match item.kind {
                WordKind::Punctuation => {
                    if let Some(last) = words.last_mut() {
                        last.punctuation.push_str(&item.content);
                    }
                }
                WordKind::Pronunciation => {
                    let start_time = timestamp(index, "start_time", item.start_time)?;
                    let end_time = timestamp(index, "end_time", item.end_time)?;

                    if let Some(previous) = words.last().map(|w| w.start_time) {
                        if start_time < previous {
                            return Err(Error::OutOfOrder {
                                index,
                                start_time,
                                previous,
                            });
                        }
                    }

                    words.push(SpokenWord {
                        text: item.content.clone(),
                        start_time,
                        end_time,
                        punctuation: String::new(),
                    });
                }
            }
        }

        Ok(Self { items, words })
    }

    /// Builds a punctuation-free transcript from `(text, start, end)` triples.
    pub fn from_timed_words<S: Into<String>>(
        words: impl IntoIterator<Item = (S, f64, f64)>,
    ) -> Result<Self, Error> {
        Self::new(
            words
                .into_iter()
                .map(|(text, start, end)| WordItem::word(text, start, end))
                .collect(),
        )
    }

    pub fn items(&self) -> &[WordItem] {
        &self.items
    }

    pub fn words(&self) -> &[SpokenWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Space-joined pronunciation contents. This is the text the
    /// text-generation service sees.
    pub fn full_text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn timestamp(index: usize, field: &'static str, value: Option<f64>) -> Result<f64, Error> {
    let value = value.ok_or(Error::MissingTimestamp { index, field })?;
    if !value.is_finite() {
        return Err(Error::InvalidTimestamp {
            index,
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}
