pub mod captions;
pub mod error;
pub mod input;
pub mod types;

pub use captions::{Caption, MAX_WORDS_PER_CAPTION, build_captions, format_srt_time, render_srt};
pub use error::Error;
pub use input::{Alternative, TranscriptionDocument, TranscriptionItem};
pub use types::{SpokenWord, Transcript, WordItem, WordKind};
