//! Application configuration and constants

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::core::ConfigError;
use crate::scoring::{AnchorPhrases, FusionWeights};

static CUSTOM_MODEL_DIR: OnceLock<PathBuf> = OnceLock::new();

// === Model Files ===
pub const EMBED_DIR: &str = "all-distilroberta-v1";
pub const EMBED_MODEL: &str = "model.onnx";
pub const EMBED_TOKENIZER: &str = "tokenizer.json";
pub const MODELS_DIR_ENV: &str = "SONGMOOD_MODELS_DIR";

// === Model Parameters ===
/// Token window of the encoder (`model_max_length`).
pub const DEFAULT_WINDOW: usize = 512;

// === Scoring Defaults ===
pub const DEFAULT_AMPLIFICATION: f64 = 45.0;
pub const DEFAULT_TEMPO: f64 = 120.0;
pub const DEFAULT_VALENCE: f64 = 0.5;
pub const DARK_MARKERS: &[&str] = &["racial violence", "lynching", "horrific suffering"];

// === Output ===
pub const DEFAULT_CSV: &str = "tracks_with_happiness_rating.csv";
pub const CSV_NULL: &str = "NULL";

/// Tunable parameters of one scoring run.
///
/// Every field is optional in the JSON file; missing fields take the
/// defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
	/// Maximum tokens per encoder pass; longer texts are chunked.
	pub window: usize,
	/// Multiplier applied to the similarity difference before the sigmoid.
	pub amplification: f64,
	pub weights: FusionWeights,
	pub default_tempo: f64,
	pub default_valence: f64,
	pub anchors: AnchorPhrases,
	/// Lower-case phrases that force the minimum score.
	pub dark_markers: Vec<String>,
	/// Feed `token_type_ids` to the encoder (BERT exports need it, RoBERTa does not).
	pub token_type_ids: bool,
}

impl Default for ScoringConfig {
	fn default() -> Self {
		Self {
			window: DEFAULT_WINDOW,
			amplification: DEFAULT_AMPLIFICATION,
			weights: FusionWeights::default(),
			default_tempo: DEFAULT_TEMPO,
			default_valence: DEFAULT_VALENCE,
			anchors: AnchorPhrases::default(),
			dark_markers: DARK_MARKERS.iter().map(|m| m.to_string()).collect(),
			token_type_ids: false,
		}
	}
}

impl ScoringConfig {
	/// Load from a JSON file and validate.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		config.validate()?;
		Ok(config)
	}

	/// Defaults, or the file at `path` when given.
	pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
		match path {
			Some(p) => {
				crate::ui::debug(&format!("Using scoring config: {}", p.display()));
				Self::load(p)
			}
			None => Ok(Self::default()),
		}
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.window == 0 {
			return Err(ConfigError::ZeroWindow);
		}
		self.weights.validate()?;

		for (name, value) in [
			("amplification", self.amplification),
			("default_tempo", self.default_tempo),
			("default_valence", self.default_valence),
		] {
			if !value.is_finite() {
				return Err(ConfigError::InvalidWeight { name, value });
			}
		}
		Ok(())
	}
}

pub fn set_model_dir(path: PathBuf) {
	let _ = CUSTOM_MODEL_DIR.set(path);
}

/// Get models directory (--models-dir, SONGMOOD_MODELS_DIR, or next to the executable)
pub fn find_models_dir() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_MODEL_DIR.get() {
		crate::ui::debug(&format!("Using custom model dir: {}", custom.display()));
		return Some(custom.clone());
	}

	if let Ok(env_path) = std::env::var(MODELS_DIR_ENV) {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using {}: {}", MODELS_DIR_ENV, env_path));
			return Some(path);
		}
	}

	if let Ok(exe) = std::env::current_exe() {
		if let Some(dir) = exe.parent() {
			let models = dir.join("models");
			if models.is_dir() {
				crate::ui::debug(&format!("Found models at: {}", models.display()));
				return Some(models);
			}
		}
	}

	None
}

/// Encoder model and tokenizer locations.
#[derive(Debug, Clone)]
pub struct ModelPaths {
	pub model: PathBuf,
	pub tokenizer: PathBuf,
}

impl ModelPaths {
	pub fn in_dir(models_dir: &Path) -> Self {
		let base = models_dir.join(EMBED_DIR);
		Self {
			model: base.join(EMBED_MODEL),
			tokenizer: base.join(EMBED_TOKENIZER),
		}
	}

	pub fn discover() -> Option<Self> {
		find_models_dir().map(|d| Self::in_dir(&d))
	}
}
