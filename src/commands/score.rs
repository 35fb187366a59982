//! Score command - rate every pending track and write the results back

use anyhow::Result;
use colored::*;
use std::path::Path;
use std::time::Instant;

use crate::config::ScoringConfig;
use crate::processing::score_tracks;
use crate::scoring::HappinessScorer;
use crate::storage::{self, JsonTrackStore, TrackStore};
use crate::ui;

pub fn run(input: &Path, csv: Option<&Path>, dry_run: bool, config: &ScoringConfig) -> Result<()> {
	let start = Instant::now();

	let mut store = JsonTrackStore::open(input)?;
	let rows = store.pending()?;
	ui::info(&format!(
		"Found {} pending tracks in {} ({} total)",
		rows.len(),
		input.display(),
		store.rows().len()
	));

	if rows.is_empty() {
		ui::info("No data to score. Nothing to do.");
		return Ok(());
	}

	let embedder = super::load_embedder(config)?;
	let scorer = HappinessScorer::new(&embedder, config)?;
	ui::success(&format!(
		"Anchor set ready ({} reference, {} opposite phrases)",
		scorer.anchors().reference().len(),
		scorer.anchors().opposite().len()
	));

	ui::header("─── Scoring ───");
	let report = score_tracks(&scorer, &rows);

	if report.failed() > 0 {
		ui::warn(&format!("{} tracks without a score", report.failed()));
	}

	let updates = report.updates();
	if dry_run {
		ui::info(&format!("Dry run: {} scores not written", updates.len()));
	} else if updates.is_empty() {
		ui::warn("No data to update in the track file.");
	} else {
		let changed = store.write_scores(&updates)?;
		ui::success(&format!("Successfully updated {} rows.", changed));
	}

	if let Some(path) = csv {
		let written = storage::export_csv(path, rows.iter().enumerate().map(|(i, row)| (row, report.rating(i))))?;
		ui::success(&format!("CSV file saved as '{}' with {} rows", path.display(), written));
	}

	println!();
	ui::success(&format!(
		"Scored {} of {} tracks in {:.1}s {}",
		report.scored(),
		rows.len(),
		start.elapsed().as_secs_f32(),
		format!("({} failed)", report.failed()).dimmed()
	));

	Ok(())
}
