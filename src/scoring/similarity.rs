//! Text sentiment from anchor similarity

use crate::core::Embedding;

use super::anchors::AnchorSet;

/// Logistic sigmoid, mapping any real number into (0, 1).
///
/// In f64 the result rounds to exactly 1.0 once `x` passes about 37, and
/// to 0.0 below about -745. At an amplification of 45 that is an anchor
/// difference of roughly 0.82, so callers needing the open interval go
/// through [`bounded_sigmoid`].
#[inline]
pub fn sigmoid(x: f64) -> f64 {
	1.0 / (1.0 + (-x).exp())
}

/// [`sigmoid`] held strictly inside (0, 1).
#[inline]
pub fn bounded_sigmoid(x: f64) -> f64 {
	sigmoid(x).clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON)
}

/// How a candidate text sits between the two anchor poles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSentiment {
	pub avg_reference: f64,
	pub avg_opposite: f64,
	/// `sigmoid(amplification * (avg_reference - avg_opposite))`, never
	/// exactly 0 or 1.
	pub score: f64,
}

impl TextSentiment {
	pub fn difference(&self) -> f64 {
		self.avg_reference - self.avg_opposite
	}
}

pub fn text_sentiment(candidate: &Embedding, anchors: &AnchorSet, amplification: f64) -> TextSentiment {
	let avg_reference = candidate.mean_cosine(anchors.reference());
	let avg_opposite = candidate.mean_cosine(anchors.opposite());
	let score = bounded_sigmoid(amplification * (avg_reference - avg_opposite));

	TextSentiment {
		avg_reference,
		avg_opposite,
		score,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn anchors() -> AnchorSet {
		AnchorSet::from_embeddings(
			vec![Embedding::new(vec![1.0, 0.0, 0.0])],
			vec![Embedding::new(vec![0.0, 1.0, 0.0]), Embedding::new(vec![0.0, 0.9, 0.1])],
		)
		.unwrap()
	}

	#[test]
	fn sigmoid_midpoint_and_symmetry() {
		assert_eq!(sigmoid(0.0), 0.5);
		assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
	}

	#[test]
	fn equidistant_text_is_neutral() {
		let s = text_sentiment(&Embedding::new(vec![0.0, 0.0, 1.0]), &anchors(), 45.0);
		assert!((s.difference()).abs() < 0.1);
		assert!(s.score > 0.0 && s.score < 1.0);
	}

	#[test]
	fn happy_text_scores_high() {
		let s = text_sentiment(&Embedding::new(vec![0.9, 0.1, 0.0]), &anchors(), 45.0);
		assert!(s.avg_reference > s.avg_opposite);
		assert!(s.score > 0.99);
	}

	#[test]
	fn dark_text_scores_low() {
		let s = text_sentiment(&Embedding::new(vec![0.1, 0.9, 0.0]), &anchors(), 45.0);
		assert!(s.score < 0.01);
		assert!(s.score > 0.0);
	}

	#[test]
	fn score_stays_open_interval_for_moderate_inputs() {
		for v in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.3, 0.3, 0.3], [-1.0, 0.5, 0.2]] {
			let s = text_sentiment(&Embedding::new(v.to_vec()), &anchors(), 5.0);
			assert!(s.score > 0.0 && s.score < 1.0, "score {} out of range", s.score);
		}
	}

	#[test]
	fn saturated_differences_stay_inside_the_open_interval() {
		assert_eq!(sigmoid(45.0 * 0.957), 1.0);

		let anchors = AnchorSet::from_embeddings(
			vec![Embedding::new(vec![1.0, 0.0, 0.0])],
			vec![Embedding::new(vec![0.0, 1.0, 0.0])],
		)
		.unwrap();
		let happy = text_sentiment(&Embedding::new(vec![1.0, 0.0, 0.0]), &anchors, 45.0);
		let dark = text_sentiment(&Embedding::new(vec![0.0, 1.0, 0.0]), &anchors, 1000.0);
		assert_eq!(happy.difference(), 1.0);
		assert!(happy.score < 1.0 && happy.score > 0.99);
		assert!(dark.score > 0.0 && dark.score < 0.01);
	}
}
