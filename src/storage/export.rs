//! CSV export of scored tracks

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::CSV_NULL;
use crate::core::Numeric;

use super::track::TrackRow;

const HEADER: [&str; 9] = [
	"spotify_id",
	"artist_id",
	"lyrics",
	"ai_theme",
	"name",
	"album",
	"tempo",
	"valence",
	"happiness_rating",
];

/// Write each row with its rating (or `NULL`) to `path`. Returns the number
/// of data rows written.
pub fn export_csv<'a, I>(path: &Path, rows: I) -> Result<usize>
where
	I: IntoIterator<Item = (&'a TrackRow, Option<f64>)>,
{
	let mut writer = csv::Writer::from_path(path).with_context(|| format!("Failed to create {}", path.display()))?;
	writer.write_record(HEADER)?;

	let mut written = 0;
	for (row, rating) in rows {
		let record = [
			row.spotify_id.clone(),
			text(&row.artist_id),
			text(&row.lyrics),
			text(&row.song_themes),
			text(&row.name),
			text(&row.album),
			number(&row.tempo),
			number(&row.valence),
			rating.map(|r| r.to_string()).unwrap_or_else(|| CSV_NULL.to_string()),
		];
		writer.write_record(&record)?;
		written += 1;
	}

	writer.flush().with_context(|| format!("Failed to flush {}", path.display()))?;
	Ok(written)
}

fn text(value: &Option<String>) -> String {
	value.clone().unwrap_or_else(|| CSV_NULL.to_string())
}

fn number(value: &Option<Numeric>) -> String {
	match value {
		Some(Numeric::Number(n)) => n.to_string(),
		Some(Numeric::Text(s)) => s.clone(),
		Some(Numeric::Other(v)) => v.to_string(),
		None => CSV_NULL.to_string(),
	}
}
