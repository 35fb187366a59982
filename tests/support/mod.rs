//! Shared fixtures for integration tests

#![allow(dead_code)]

use songmood::core::EmbedError;
use songmood::models::TextEncoder;
use std::sync::atomic::{AtomicUsize, Ordering};

const HAPPY: &[&str] = &[
	"happiness", "happy", "bliss", "heaven", "euphoria", "jubilation", "joy", "delight", "laughing",
	"elation", "mirth", "rapture", "sunshine", "dance", "smile",
];

const DARK: &[&str] = &[
	"unhappiness", "oppressed", "sadness", "hopelessness", "entrapment", "misery", "sorrow", "anguish",
	"agony", "woe", "desolation", "gloom", "despair", "suffering", "mourning", "tragedy", "horror",
	"terror", "trauma", "grief", "haunted", "tears",
];

/// Bag-of-words encoder with happy, dark and neutral axes. Counts windows.
#[derive(Default)]
pub struct WordAxisEncoder {
	windows: AtomicUsize,
}

impl WordAxisEncoder {
	pub fn windows(&self) -> usize {
		self.windows.load(Ordering::SeqCst)
	}
}

impl TextEncoder for WordAxisEncoder {
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
		self.windows.fetch_add(1, Ordering::SeqCst);
		let mut pooled = [0.0f32; 3];
		tokens.iter().for_each(|&t| pooled[t as usize] += 1.0);
		Ok(pooled.iter().map(|x| x / tokens.len() as f32).collect())
	}
}

pub fn words(n: usize) -> String {
	vec!["river"; n].join(" ")
}
