//! Small deterministic encoders for unit tests

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::EmbedError;
use crate::models::TextEncoder;

/// One token per whitespace-separated word, ids are positions. A window
/// embeds as `[len, first_id, last_id]`; every call is counted.
#[derive(Default)]
pub struct CountingEncoder {
	calls: AtomicUsize,
}

impl CountingEncoder {
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

impl TextEncoder for CountingEncoder {
	fn tokenize(&self, text: &str) -> Result<Vec<u32>, EmbedError> {
		Ok((0..text.split_whitespace().count() as u32).collect())
	}

	fn encode(&self, tokens: &[u32]) -> Result<Vec<f32>, EmbedError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		let (first, last) = match (tokens.first(), tokens.last()) {
			(Some(f), Some(l)) => (*f as f32, *l as f32),
			_ => return Err(EmbedError::EmptyWindow),
		};
		Ok(vec![tokens.len() as f32, first, last])
	}
}

pub struct FailingEncoder;

impl TextEncoder for FailingEncoder {
	fn tokenize(&self, _text: &str) -> Result<Vec<u32>, EmbedError> {
		Err(EmbedError::Model("tokenizer exploded".into()))
	}

	fn encode(&self, _tokens: &[u32]) -> Result<Vec<f32>, EmbedError> {
		Err(EmbedError::Model("model exploded".into()))
	}
}

const HAPPY: &[&str] = &[
	"happiness", "happy", "bliss", "heaven", "euphoria", "jubilation", "joy", "delight", "laughing",
	"elation", "mirth", "rapture", "sunshine", "dance", "love",
];

const DARK: &[&str] = &[
	"unhappiness", "oppressed", "sadness", "hopelessness", "entrapment", "misery", "sorrow", "anguish",
	"agony", "woe", "desolation", "gloom", "despair", "suffering", "mourning", "tragedy", "horror",
	"terror", "trauma", "grief", "haunted", "tears", "lynching", "violence",
];

/// Token id that makes `encode` fail.
const POISON: u32 = 99;

/// Bag-of-words encoder over three axes: happy, dark, neutral.
/// The word "glitch" makes inference fail.
pub struct LexiconEncoder;

impl TextEncoder for LexiconEncoder {
	fn tokenize(&self, text: &str) -> Result<Vec<u32>, EmbedError> {
		Ok(text
			.split(|c: char| !c.is_alphanumeric())
			.filter(|w| !w.is_empty())
			.map(|w| {
				let w = w.to_lowercase();
				if HAPPY.contains(&w.as_str()) {
					0
				} else if DARK.contains(&w.as_str()) {
					1
				} else if w == "glitch" {
					POISON
				} else {
					2
				}
			})
			.collect())
	}

	fn encode(&self, tokens: &[u32]) -> Result<Vec<f32>, EmbedError> {
		if tokens.is_empty() {
			return Err(EmbedError::EmptyWindow);
		}
		let mut pooled = vec![0.0f32; 3];
		for &t in tokens {
			if t == POISON {
				return Err(EmbedError::Model("glitch".into()));
			}
			pooled[t as usize] += 1.0;
		}
		let n = tokens.len() as f32;
		Ok(pooled.into_iter().map(|x| x / n).collect())
	}
}
