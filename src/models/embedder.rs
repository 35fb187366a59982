//! Arbitrary-length text to a single embedding

use crate::core::{ConfigError, EmbedError, Embedding};
use crate::ui;

use super::chunk::window_spans;
use super::encoder::TextEncoder;

/// Wraps an encoder with input validation, sliding-window chunking and
/// failure containment.
pub struct Embedder<E> {
	encoder: E,
	window: usize,
}

impl<E: TextEncoder> Embedder<E> {
	pub fn new(encoder: E, window: usize) -> Result<Self, ConfigError> {
		if window == 0 {
			return Err(ConfigError::ZeroWindow);
		}
		Ok(Self { encoder, window })
	}

	pub fn window(&self) -> usize {
		self.window
	}

	pub fn encoder(&self) -> &E {
		&self.encoder
	}

	/// Embed `text`, or `None` when it is blank or the encoder fails.
	///
	/// Failures are logged with a short excerpt of the text and never
	/// propagated.
	pub fn embed(&self, text: &str) -> Option<Embedding> {
		if text.trim().is_empty() {
			return None;
		}

		match self.try_embed(text) {
			Ok(embedding) => Some(embedding),
			Err(e) => {
				ui::warn(&format!(
					"Error generating embedding for text: {}, error: {}",
					ui::snippet(text),
					e
				));
				None
			}
		}
	}

	/// Embed `text`, surfacing encoder errors.
	pub fn try_embed(&self, text: &str) -> Result<Embedding, EmbedError> {
		let tokens = self.encoder.tokenize(text)?;
		let spans = window_spans(tokens.len(), self.window);

		if spans.len() > 1 {
			ui::debug(&format!(
				"{} tokens exceed window of {}, embedding {} chunks",
				tokens.len(),
				self.window,
				spans.len()
			));
		}

		let windows = spans
			.into_iter()
			.map(|span| self.encoder.encode(&tokens[span]).map(Embedding::new))
			.collect::<Result<Vec<_>, _>>()?;

		if windows.is_empty() {
			return Err(EmbedError::EmptyWindow);
		}
		Embedding::mean(windows).ok_or(EmbedError::RaggedWindows)
	}
}
