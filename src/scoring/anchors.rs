//! Reference and opposite anchor phrases and their embeddings

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Embedding};
use crate::models::{Embedder, TextEncoder};
use crate::ui;

const REFERENCE: &[&str] = &[
	"happiness",
	"bliss",
	"heaven",
	"euphoria",
	"jubilation",
	"joy",
	"delight",
	"laughing with friends",
	"elation",
	"mirth",
	"jubilation",
	"delight",
	"rapture",
];

const OPPOSITE: &[&str] = &[
	"unhappiness",
	"oppressed",
	"deep sadness",
	"hopelessness",
	"entrapment",
	"misery",
	"sorrow",
	"anguish",
	"agony",
	"woe",
	"desolation",
	"gloom",
	"profound sadness",
	"despair",
	"horrific suffering",
	"mourning a tragedy",
	"horror",
	"terror",
	"trauma",
	"grief",
	"hopelessness",
	"feeling haunted by memories",
];

/// The two poles of the happiness axis, as phrases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnchorPhrases {
	/// Happy exemplars.
	pub reference: Vec<String>,
	/// Sad and dark exemplars.
	pub opposite: Vec<String>,
}

impl Default for AnchorPhrases {
	fn default() -> Self {
		Self {
			reference: REFERENCE.iter().map(|p| p.to_string()).collect(),
			opposite: OPPOSITE.iter().map(|p| p.to_string()).collect(),
		}
	}
}

/// Embedded anchor phrases, built once per batch and shared read-only.
#[derive(Debug, Clone)]
pub struct AnchorSet {
	reference: Vec<Embedding>,
	opposite: Vec<Embedding>,
}

impl AnchorSet {
	/// Embed every phrase, dropping the ones that yield no embedding.
	///
	/// Fails when either pole ends up empty.
	pub fn build<E: TextEncoder>(embedder: &Embedder<E>, phrases: &AnchorPhrases) -> Result<Self, ConfigError> {
		let embed_all = |list: &[String]| -> Vec<Embedding> {
			list.iter()
				.filter_map(|phrase| {
					let embedding = embedder.embed(phrase);
					if embedding.is_none() {
						ui::debug(&format!("Dropping anchor phrase without embedding: \"{}\"", phrase));
					}
					embedding
				})
				.collect()
		};

		Self::from_embeddings(embed_all(phrases.reference.as_slice()), embed_all(phrases.opposite.as_slice()))
	}

	pub fn from_embeddings(reference: Vec<Embedding>, opposite: Vec<Embedding>) -> Result<Self, ConfigError> {
		if reference.is_empty() {
			return Err(ConfigError::EmptyAnchors { group: "reference" });
		}
		if opposite.is_empty() {
			return Err(ConfigError::EmptyAnchors { group: "opposite" });
		}
		Ok(Self { reference, opposite })
	}

	pub fn reference(&self) -> &[Embedding] {
		&self.reference
	}

	pub fn opposite(&self) -> &[Embedding] {
		&self.opposite
	}

	pub fn dim(&self) -> usize {
		self.reference[0].dim()
	}
}
