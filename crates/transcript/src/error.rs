#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("item {index} has no alternatives")]
    MissingAlternative { index: usize },
    #[error("pronunciation item {index} has no {field}")]
    MissingTimestamp { index: usize, field: &'static str },
    #[error("item {index} has invalid {field}: {value:?}")]
    InvalidTimestamp {
        index: usize,
        field: &'static str,
        value: String,
    },
    #[error("item {index} starts at {start_time}s, before the previous word at {previous}s")]
    OutOfOrder {
        index: usize,
        start_time: f64,
        previous: f64,
    },
}
