//! Batch processing of tracks

pub mod batch;

pub use batch::{score_track, score_tracks, BatchReport, TrackOutcome};
