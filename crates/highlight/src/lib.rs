mod clip;
mod config;
mod error;
mod extractor;
mod generator;
mod index;
mod request;
mod scoring;
mod text;

pub mod resolve;

pub use clip::{ClipAssembler, ResolvedClip};
pub use config::HighlightConfig;
pub use error::Error;
pub use extractor::{Aligner, HighlightExtractor};
pub use generator::{BoxFuture, Generator, OllamaGenerator};
pub use index::{IndexedWord, MAX_GRAM, TranscriptIndex};
pub use request::{CandidateSegment, HighlightRequester, build_prompt, parse_segments};
pub use resolve::{PositionResolver, Resolution, Tier};
pub use scoring::{ConfidenceScorer, round2};
pub use text::{normalize, tokenize};
