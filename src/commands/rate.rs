//! Rate command - score a single text

use anyhow::Result;
use colored::*;

use crate::config::ScoringConfig;
use crate::core::{resolve_text, ItemError};
use crate::scoring::HappinessScorer;
use crate::ui;

pub fn run(
	text: Option<&str>,
	theme: Option<&str>,
	tempo: Option<f64>,
	valence: Option<f64>,
	config: &ScoringConfig,
) -> Result<()> {
	let Some(resolved) = resolve_text(text, theme) else {
		ui::error(&ItemError::NoText.to_string());
		return Ok(());
	};

	let embedder = super::load_embedder(config)?;
	let scorer = HappinessScorer::new(&embedder, config)?;

	ui::info(&format!("Rating: \"{}\"", ui::snippet(resolved)));

	match scorer.breakdown(Some(resolved), tempo, valence) {
		Ok(b) => {
			ui::header("Breakdown");
			println!("  {:<16} {:.4}", "avg reference", b.sentiment.avg_reference);
			println!("  {:<16} {:.4}", "avg opposite", b.sentiment.avg_opposite);
			println!("  {:<16} {:.4}", "text score", b.sentiment.score);
			println!("  {:<16} {:.1} bpm → {:.4}", "tempo", b.tempo, b.tempo_score);
			println!("  {:<16} {:.4}", "valence", b.valence);
			if let Some(marker) = &b.marker {
				println!("  {:<16} {}", "override", format!("\"{}\"", marker).bright_red());
			}
			println!();
			ui::success(&format!("Happiness {} {}", ui::score_badge(b.score), format!("({:.4})", b.score).dimmed()));
		}
		Err(e) => ui::error(&format!("No score: {}", e)),
	}

	Ok(())
}
