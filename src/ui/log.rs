//! Unified logging system

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Longest text excerpt shown when an item is reported.
pub const SNIPPET_CHARS: usize = 50;

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}

/// First `SNIPPET_CHARS` characters of `text` on a single line, with an
/// ellipsis when cut.
pub fn snippet(text: &str) -> String {
	let flat: String = text
		.chars()
		.map(|c| if c.is_whitespace() { ' ' } else { c })
		.collect();
	let mut chars = flat.chars();
	let head: String = chars.by_ref().take(SNIPPET_CHARS).collect();
	if chars.next().is_some() {
		format!("{}...", head)
	} else {
		head
	}
}

/// Score rendered as a colored percentage: green when happy, red when dark.
pub fn score_badge(score: f64) -> String {
	let label = format!("{:.1}%", score * 100.0);
	if score >= 0.66 {
		label.bright_green().to_string()
	} else if score >= 0.33 {
		label.bright_yellow().to_string()
	} else {
		label.bright_red().to_string()
	}
}

/// Log a scored track with its id and dimmed score.
pub fn item_scored(id: &str, score: f64) {
	debug(&format!("{} {}", id, format!("{:.4}", score).dimmed()));
}

/// Log an item that produced no score.
pub fn item_failed(id: &str, reason: &str) {
	warn(&format!("{} {}", id.bright_white(), reason.dimmed()));
}
