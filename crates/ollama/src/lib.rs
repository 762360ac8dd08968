mod client;
mod error;
mod types;

pub use client::{Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::Error;
pub use types::*;
