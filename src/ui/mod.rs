//! # User Interface
//!
//! Colored terminal output for batch progress and per-item reports.

pub mod log;

pub use log::{debug, error, header, info, item_failed, item_scored, score_badge, snippet, success, warn, Log};
