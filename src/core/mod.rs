//! Core domain types

pub mod embedding;
pub mod error;
pub mod input;

pub use embedding::Embedding;
pub use error::{ConfigError, EmbedError, ItemError};
pub use input::{resolve_text, NotANumber, Numeric, ScoreInput};
