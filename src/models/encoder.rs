//! Encoder seam between the embedder and a concrete model

use crate::core::EmbedError;

/// A tokenizer plus a model that mean-pools hidden states.
///
/// `encode` receives at most one window of tokens and returns the mean of
/// the per-token hidden states for that window.
pub trait TextEncoder: Send + Sync {
	/// Token ids for `text`, boundary markers included.
	fn tokenize(&self, text: &str) -> Result<Vec<u32>, EmbedError>;

	/// Mean-pooled hidden state of one token window.
	fn encode(&self, tokens: &[u32]) -> Result<Vec<f32>, EmbedError>;
}

impl<T: TextEncoder + ?Sized> TextEncoder for &T {
	fn tokenize(&self, text: &str) -> Result<Vec<u32>, EmbedError> {
		(**self).tokenize(text)
	}

	fn encode(&self, tokens: &[u32]) -> Result<Vec<f32>, EmbedError> {
		(**self).encode(tokens)
	}
}

impl<T: TextEncoder + ?Sized> TextEncoder for Box<T> {
	fn tokenize(&self, text: &str) -> Result<Vec<u32>, EmbedError> {
		(**self).tokenize(text)
	}

	fn encode(&self, tokens: &[u32]) -> Result<Vec<f32>, EmbedError> {
		(**self).encode(tokens)
	}
}
