//! Scoring inputs and their normalization

use serde::{Deserialize, Serialize};

/// Raw material for one happiness score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreInput {
	pub lyrics: Option<String>,
	pub theme: Option<String>,
	pub tempo: Option<f64>,
	pub valence: Option<f64>,
}

impl ScoreInput {
	pub fn from_text(text: impl Into<String>) -> Self {
		Self {
			lyrics: Some(text.into()),
			..Self::default()
		}
	}

	pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
		self.theme = Some(theme.into());
		self
	}

	pub fn with_tempo(mut self, bpm: f64) -> Self {
		self.tempo = Some(bpm);
		self
	}

	pub fn with_valence(mut self, valence: f64) -> Self {
		self.valence = Some(valence);
		self
	}

	/// Lyrics when present, otherwise the theme text.
	pub fn text(&self) -> Option<&str> {
		resolve_text(self.lyrics.as_deref(), self.theme.as_deref())
	}
}

/// Pick the text to embed: trimmed lyrics if non-blank, else trimmed theme.
pub fn resolve_text<'a>(lyrics: Option<&'a str>, theme: Option<&'a str>) -> Option<&'a str> {
	[lyrics, theme]
		.into_iter()
		.flatten()
		.map(str::trim)
		.find(|t| !t.is_empty())
}

/// Marker for a value that does not coerce to a finite float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotANumber;

/// Numeric column as stored: a number, or text that may hold one.
///
/// Any other JSON value is kept as `Other` so one bad cell fails its own
/// row instead of the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
	Number(f64),
	Text(String),
	Other(serde_json::Value),
}

impl Numeric {
	/// Coerce to a finite float. Blank text counts as missing.
	pub fn coerce(&self) -> Result<Option<f64>, NotANumber> {
		match self {
			Self::Number(n) if n.is_finite() => Ok(Some(*n)),
			Self::Number(_) => Err(NotANumber),
			Self::Text(s) if s.trim().is_empty() => Ok(None),
			Self::Text(s) => match s.trim().parse::<f64>() {
				Ok(n) if n.is_finite() => Ok(Some(n)),
				_ => Err(NotANumber),
			},
			Self::Other(_) => Err(NotANumber),
		}
	}
}

impl std::fmt::Display for Numeric {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Number(n) => write!(f, "{}", n),
			Self::Text(s) => write!(f, "{:?}", s),
			Self::Other(v) => write!(f, "{}", v),
		}
	}
}
