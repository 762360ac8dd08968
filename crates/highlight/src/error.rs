/// Every way a highlight can fail to materialize.
///
/// None of these abort an extraction: the extractor logs them and moves on
/// to the next segment.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("text generation unavailable: {0}")]
    GeneratorUnavailable(String),
    #[error("segment has {words} words, at least {min} required")]
    TooShort { words: usize, min: usize },
    #[error("segment text matched nowhere in the transcript")]
    NoMatch,
    #[error("resolved span ends at {end_time}s, not after its start at {start_time}s")]
    InvertedSpan { start_time: f64, end_time: f64 },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
