//! Track rows as persisted in the shared store

use serde::{Deserialize, Serialize};

use crate::core::{ItemError, Numeric, ScoreInput};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackRow {
	pub spotify_id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub artist_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub artist: Option<String>,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub album: Option<String>,
	#[serde(default)]
	pub lyrics: Option<String>,
	/// Comma-separated themes from the theme extractor.
	#[serde(default)]
	pub song_themes: Option<String>,
	#[serde(default)]
	pub tempo: Option<Numeric>,
	#[serde(default)]
	pub valence: Option<Numeric>,
	#[serde(default)]
	pub happiness: Option<f64>,
}

impl TrackRow {
	/// Themed and not yet scored.
	pub fn is_pending(&self) -> bool {
		self.song_themes.is_some() && self.happiness.is_none()
	}

	/// Has no themes yet.
	pub fn needs_themes(&self) -> bool {
		self.song_themes.is_none()
	}

	/// Coerce the numeric columns and assemble the scoring input.
	pub fn to_input(&self) -> Result<ScoreInput, ItemError> {
		let invalid = || ItemError::InvalidNumber {
			tempo: display(&self.tempo),
			valence: display(&self.valence),
		};

		let tempo = coerce(&self.tempo).ok_or_else(invalid)?;
		let valence = coerce(&self.valence).ok_or_else(invalid)?;

		Ok(ScoreInput {
			lyrics: self.lyrics.clone(),
			theme: self.song_themes.clone(),
			tempo,
			valence,
		})
	}
}

/// `Some(value)` when the column is missing or numeric, `None` when it is junk.
fn coerce(value: &Option<Numeric>) -> Option<Option<f64>> {
	match value {
		None => Some(None),
		Some(n) => n.coerce().ok(),
	}
}

fn display(value: &Option<Numeric>) -> String {
	value.as_ref().map(|n| n.to_string()).unwrap_or_else(|| "None".to_string())
}
