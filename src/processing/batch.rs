//! Batch driver: score every pending track against one scorer

use rayon::prelude::*;

use crate::core::ItemError;
use crate::models::TextEncoder;
use crate::scoring::HappinessScorer;
use crate::storage::TrackRow;
use crate::ui;

/// Outcome for one track, correlated by id.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackOutcome {
	pub spotify_id: String,
	pub result: Result<f64, ItemError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
	/// One entry per input row, in input order.
	pub outcomes: Vec<TrackOutcome>,
}

impl BatchReport {
	pub fn scored(&self) -> usize {
		self.outcomes.iter().filter(|o| o.result.is_ok()).count()
	}

	pub fn failed(&self) -> usize {
		self.outcomes.len() - self.scored()
	}

	/// `(spotify_id, score)` pairs ready for write-back.
	pub fn updates(&self) -> Vec<(String, f64)> {
		self.outcomes
			.iter()
			.filter_map(|o| o.result.as_ref().ok().map(|s| (o.spotify_id.clone(), *s)))
			.collect()
	}

	pub fn rating(&self, index: usize) -> Option<f64> {
		self.outcomes.get(index).and_then(|o| o.result.as_ref().ok().copied())
	}
}

/// Score one row; failures come back as values, never panics or errors.
pub fn score_track<E: TextEncoder>(scorer: &HappinessScorer<'_, E>, row: &TrackRow) -> TrackOutcome {
	let result = row.to_input().and_then(|input| scorer.score_input(&input));

	match &result {
		Ok(score) => ui::item_scored(&row.spotify_id, *score),
		Err(e) => ui::item_failed(&row.spotify_id, &e.to_string()),
	}

	TrackOutcome {
		spotify_id: row.spotify_id.clone(),
		result,
	}
}

/// Score rows in parallel. Order of outcomes follows `rows`.
pub fn score_tracks<E: TextEncoder>(scorer: &HappinessScorer<'_, E>, rows: &[TrackRow]) -> BatchReport {
	let outcomes = rows.par_iter().map(|row| score_track(scorer, row)).collect();
	BatchReport { outcomes }
}
