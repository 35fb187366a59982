//! Anchors command - sanity-check the anchor geometry

use anyhow::Result;
use colored::*;

use crate::config::ScoringConfig;
use crate::scoring::{text_sentiment, HappinessScorer};
use crate::ui;

pub fn run(config: &ScoringConfig) -> Result<()> {
	let embedder = super::load_embedder(config)?;
	let scorer = HappinessScorer::new(&embedder, config)?;
	let anchors = scorer.anchors();

	ui::success(&format!(
		"{} reference and {} opposite embeddings (dim {})",
		anchors.reference().len(),
		anchors.opposite().len(),
		anchors.dim()
	));

	let groups = [("Reference", &config.anchors.reference, true), ("Opposite", &config.anchors.opposite, false)];

	let mut misplaced = 0;
	for (title, phrases, happy) in groups {
		ui::header(title);
		for phrase in phrases.iter() {
			let Some(embedding) = scorer.embedder().embed(phrase) else {
				println!("  {} {}", "-".dimmed(), phrase.dimmed());
				continue;
			};
			let s = text_sentiment(&embedding, anchors, config.amplification);
			let wrong_side = if happy { s.score < 0.5 } else { s.score > 0.5 };
			if wrong_side {
				misplaced += 1;
			}
			println!(
				"  {:<30} {} {}",
				phrase,
				ui::score_badge(s.score),
				if wrong_side { "⚠".bright_yellow().to_string() } else { String::new() }
			);
		}
	}

	println!();
	if misplaced > 0 {
		ui::warn(&format!("{} anchor phrases land on the opposite side", misplaced));
	} else {
		ui::success("Every anchor phrase lands on its own side");
	}

	Ok(())
}
