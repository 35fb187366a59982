//! Blending text sentiment with tempo and valence

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Final scores never drop below this, and the dark-content override pins to it.
pub const MIN_SCORE: f64 = 0.01;
pub const MAX_SCORE: f64 = 1.0;

/// BPM where the linear ramp reaches 1.0.
const TEMPO_KNEE: f64 = 160.0;
/// BPM where the logarithmic bonus is exhausted.
const TEMPO_CAP: f64 = 240.0;
/// Extra tempo credit available between the knee and the cap.
const TEMPO_BONUS: f64 = 0.25;
const TEMPO_MAX_RAW: f64 = 1.0 + TEMPO_BONUS;

/// Relative weight of each signal in the final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FusionWeights {
	pub text: f64,
	pub valence: f64,
	pub tempo: f64,
}

impl Default for FusionWeights {
	fn default() -> Self {
		Self {
			text: 0.6,
			valence: 0.2,
			tempo: 0.2,
		}
	}
}

impl FusionWeights {
	pub fn validate(&self) -> Result<(), ConfigError> {
		for (name, value) in [("text", self.text), ("valence", self.valence), ("tempo", self.tempo)] {
			if !value.is_finite() || value < 0.0 {
				return Err(ConfigError::InvalidWeight { name, value });
			}
		}
		Ok(())
	}
}

/// Tempo credit before normalization: linear up to 160 BPM, then a
/// logarithmic curve adding at most 0.25 until 240 BPM, flat after that.
pub fn tempo_raw(bpm: f64) -> f64 {
	if bpm <= 0.0 {
		0.0
	} else if bpm <= TEMPO_KNEE {
		bpm / TEMPO_KNEE
	} else if bpm <= TEMPO_CAP {
		let normalized = (bpm - TEMPO_KNEE) / (TEMPO_CAP - TEMPO_KNEE);
		1.0 + TEMPO_BONUS * ((normalized * 19.0 + 1.0).ln() / 20.0f64.ln())
	} else {
		TEMPO_MAX_RAW
	}
}

/// Tempo credit normalized to [0, 1].
pub fn tempo_score(bpm: f64) -> f64 {
	tempo_raw(bpm) / TEMPO_MAX_RAW
}

/// Weighted blend of the three signals, clamped to [0.01, 1.0].
pub fn fuse(text_score: f64, bpm: f64, valence: f64, weights: &FusionWeights) -> f64 {
	let blended = weights.text * text_score + weights.valence * valence + weights.tempo * tempo_score(bpm);
	blended.clamp(MIN_SCORE, MAX_SCORE)
}

/// Case-insensitive literal phrases that mark extreme content.
#[derive(Debug, Clone, Default)]
pub struct DarkContentFilter {
	markers: Vec<String>,
}

impl DarkContentFilter {
	pub fn new<I, S>(markers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			markers: markers
				.into_iter()
				.map(|m| m.as_ref().trim().to_lowercase())
				.filter(|m| !m.is_empty())
				.collect(),
		}
	}

	/// First marker contained in `text`, if any.
	pub fn find<'a>(&'a self, text: &str) -> Option<&'a str> {
		if self.markers.is_empty() {
			return None;
		}
		let lowered = text.to_lowercase();
		self.markers
			.iter()
			.find(|m| lowered.contains(m.as_str()))
			.map(String::as_str)
	}

	/// The override runs after the clamp and wins over it.
	pub fn apply(&self, text: &str, score: f64) -> f64 {
		if self.find(text).is_some() {
			MIN_SCORE
		} else {
			score
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::DARK_MARKERS;

	fn close(a: f64, b: f64, tol: f64) -> bool {
		(a - b).abs() < tol
	}

	#[test]
	fn tempo_curve_pieces() {
		assert_eq!(tempo_raw(-10.0), 0.0);
		assert_eq!(tempo_raw(0.0), 0.0);
		assert_eq!(tempo_raw(80.0), 0.5);
		assert_eq!(tempo_raw(160.0), 1.0);
		assert!(close(tempo_raw(240.0), 1.25, 1e-12));
		assert_eq!(tempo_raw(300.0), 1.25);
	}

	#[test]
	fn tempo_120_normalizes_to_point_six() {
		assert!(close(tempo_raw(120.0), 0.75, 1e-12));
		assert!(close(tempo_score(120.0), 0.6, 1e-12));
	}

	#[test]
	fn tempo_200_worked_example() {
		assert!(close(tempo_raw(200.0), 1.196, 1e-3));
		assert!(close(tempo_score(200.0), 0.957, 1e-3));
	}

	#[test]
	fn tempo_is_monotonic_and_capped() {
		let mut prev = tempo_score(0.0);
		for step in 1..=2400 {
			let bpm = step as f64 / 10.0;
			let s = tempo_score(bpm);
			assert!(s >= prev, "tempo score dropped at {} bpm", bpm);
			prev = s;
		}
		assert!(close(prev, 1.0, 1e-12));
		for bpm in [241.0, 300.0, 1000.0] {
			assert_eq!(tempo_score(bpm), 1.0);
		}
	}

	#[test]
	fn fusion_worked_example() {
		let score = fuse(0.8, 120.0, 0.5, &FusionWeights::default());
		assert!(close(score, 0.70, 1e-9));
	}

	#[test]
	fn fusion_clamps_both_ends() {
		let w = FusionWeights::default();
		assert_eq!(fuse(0.0, 0.0, 0.0, &w), MIN_SCORE);
		assert_eq!(fuse(1.0, 300.0, 5.0, &w), MAX_SCORE);
		assert_eq!(fuse(0.0, -50.0, -3.0, &w), MIN_SCORE);
	}

	#[test]
	fn invalid_weights() {
		let w = FusionWeights { text: f64::NAN, ..FusionWeights::default() };
		assert!(w.validate().is_err());
		let w = FusionWeights { tempo: -0.1, ..FusionWeights::default() };
		assert!(w.validate().is_err());
		assert!(FusionWeights::default().validate().is_ok());
	}

	#[test]
	fn dark_markers_match_case_insensitively() {
		let filter = DarkContentFilter::new(DARK_MARKERS);
		assert_eq!(filter.find("Themes: LYNCHING, injustice"), Some("lynching"));
		assert_eq!(filter.find("a song about Horrific Suffering"), Some("horrific suffering"));
		assert_eq!(filter.find("suffering that is horrific"), None);
		assert_eq!(filter.apply("racial violence", 0.93), MIN_SCORE);
		assert_eq!(filter.apply("sunshine", 0.93), 0.93);
	}

	#[test]
	fn empty_filter_never_matches() {
		let filter = DarkContentFilter::new(Vec::<String>::new());
		assert_eq!(filter.find("lynching"), None);
		let blanks = DarkContentFilter::new(["", "  "]);
		assert_eq!(blanks.find("anything"), None);
	}
}
