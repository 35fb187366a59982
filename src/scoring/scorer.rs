//! Per-item happiness scoring against a shared anchor set

use crate::config::ScoringConfig;
use crate::core::{resolve_text, ConfigError, ItemError, ScoreInput};
use crate::models::{Embedder, TextEncoder};
use crate::ui;

use super::anchors::AnchorSet;
use super::fusion::{fuse, tempo_score, DarkContentFilter, FusionWeights};
use super::similarity::{text_sentiment, TextSentiment};

/// Every intermediate value behind one final score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
	pub sentiment: TextSentiment,
	pub tempo: f64,
	pub valence: f64,
	pub tempo_score: f64,
	/// Dark-content marker that forced the minimum, if any.
	pub marker: Option<String>,
	pub score: f64,
}

/// Scores items one at a time; holds only read-only state, so one scorer
/// can be shared across threads.
pub struct HappinessScorer<'e, E> {
	embedder: &'e Embedder<E>,
	anchors: AnchorSet,
	weights: FusionWeights,
	amplification: f64,
	default_tempo: f64,
	default_valence: f64,
	dark: DarkContentFilter,
}

impl<'e, E: TextEncoder> HappinessScorer<'e, E> {
	/// Build the anchor set and validate the configuration. Any error here
	/// is fatal for the run.
	pub fn new(embedder: &'e Embedder<E>, config: &ScoringConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		let anchors = AnchorSet::build(embedder, &config.anchors)?;
		ui::debug(&format!(
			"Anchor set ready: {} reference, {} opposite, dim {}",
			anchors.reference().len(),
			anchors.opposite().len(),
			anchors.dim()
		));
		Ok(Self::with_anchors(embedder, anchors, config))
	}

	pub fn with_anchors(embedder: &'e Embedder<E>, anchors: AnchorSet, config: &ScoringConfig) -> Self {
		Self {
			embedder,
			anchors,
			weights: config.weights,
			amplification: config.amplification,
			default_tempo: config.default_tempo,
			default_valence: config.default_valence,
			dark: DarkContentFilter::new(&config.dark_markers),
		}
	}

	pub fn anchors(&self) -> &AnchorSet {
		&self.anchors
	}

	pub fn embedder(&self) -> &Embedder<E> {
		self.embedder
	}

	/// Happiness in [0.01, 1.0] for `text`, or the reason there is none.
	pub fn score(&self, text: Option<&str>, tempo: Option<f64>, valence: Option<f64>) -> Result<f64, ItemError> {
		self.breakdown(text, tempo, valence).map(|b| b.score)
	}

	/// Score an input, falling back from lyrics to theme text.
	pub fn score_input(&self, input: &ScoreInput) -> Result<f64, ItemError> {
		self.score(input.text(), input.tempo, input.valence)
	}

	pub fn breakdown(
		&self,
		text: Option<&str>,
		tempo: Option<f64>,
		valence: Option<f64>,
	) -> Result<ScoreBreakdown, ItemError> {
		let tempo = tempo.unwrap_or(self.default_tempo);
		let valence = valence.unwrap_or(self.default_valence);
		if !tempo.is_finite() || !valence.is_finite() {
			let err = ItemError::InvalidNumber {
				tempo: tempo.to_string(),
				valence: valence.to_string(),
			};
			ui::debug(&err.to_string());
			return Err(err);
		}

		let text = resolve_text(text, None).ok_or(ItemError::NoText)?;
		let embedding = self.embedder.embed(text).ok_or(ItemError::NoEmbedding)?;

		let sentiment = text_sentiment(&embedding, &self.anchors, self.amplification);
		let fused = fuse(sentiment.score, tempo, valence, &self.weights);

		let marker = self.dark.find(text).map(str::to_string);
		let score = self.dark.apply(text, fused);

		Ok(ScoreBreakdown {
			sentiment,
			tempo,
			valence,
			tempo_score: tempo_score(tempo),
			marker,
			score,
		})
	}
}
