//! # Happiness Scoring
//!
//! Anchor set, similarity scorer and feature fusion.

pub mod anchors;
pub mod fusion;
pub mod scorer;
pub mod similarity;

pub use anchors::{AnchorPhrases, AnchorSet};
pub use fusion::{fuse, tempo_raw, tempo_score, DarkContentFilter, FusionWeights, MAX_SCORE, MIN_SCORE};
pub use scorer::{HappinessScorer, ScoreBreakdown};
pub use similarity::{bounded_sigmoid, sigmoid, text_sentiment, TextSentiment};
