//! Track store: the persistence boundary of the batch driver

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::track::TrackRow;

/// Fetch rows to score and write scores and themes back.
pub trait TrackStore {
	/// Rows that have themes but no happiness yet.
	fn pending(&self) -> Result<Vec<TrackRow>>;

	/// Rows that still need theme extraction.
	fn unthemed(&self) -> Result<Vec<TrackRow>>;

	/// Set `happiness` for each `(spotify_id, score)` and persist. Returns
	/// the number of rows changed.
	fn write_scores(&mut self, updates: &[(String, f64)]) -> Result<usize>;

	/// Set themes and lyrics for one row and persist.
	fn write_themes(&mut self, spotify_id: &str, themes: &str, lyrics: Option<&str>) -> Result<bool>;
}

/// Tracks held in a pretty-printed JSON array file.
pub struct JsonTrackStore {
	path: PathBuf,
	rows: Vec<TrackRow>,
}

impl JsonTrackStore {
	pub fn open(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
		let rows: Vec<TrackRow> =
			serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))?;

		crate::ui::debug(&format!("Loaded {} tracks from {}", rows.len(), path.display()));
		Ok(Self {
			path: path.to_path_buf(),
			rows,
		})
	}

	pub fn rows(&self) -> &[TrackRow] {
		&self.rows
	}

	fn save(&self) -> Result<()> {
		let json = serde_json::to_string_pretty(&self.rows).context("Failed to serialize tracks")?;
		let tmp = self.path.with_extension("json.tmp");
		fs::write(&tmp, json).with_context(|| format!("Failed to write {}", tmp.display()))?;
		fs::rename(&tmp, &self.path).with_context(|| format!("Failed to replace {}", self.path.display()))?;
		Ok(())
	}
}

impl TrackStore for JsonTrackStore {
	fn pending(&self) -> Result<Vec<TrackRow>> {
		Ok(self.rows.iter().filter(|r| r.is_pending()).cloned().collect())
	}

	fn unthemed(&self) -> Result<Vec<TrackRow>> {
		Ok(self.rows.iter().filter(|r| r.needs_themes()).cloned().collect())
	}

	fn write_scores(&mut self, updates: &[(String, f64)]) -> Result<usize> {
		let by_id: HashMap<&str, f64> = updates.iter().map(|(id, s)| (id.as_str(), *s)).collect();

		let mut changed = 0;
		for row in self.rows.iter_mut() {
			if let Some(&score) = by_id.get(row.spotify_id.as_str()) {
				row.happiness = Some(score);
				changed += 1;
			}
		}

		if changed > 0 {
			self.save()?;
		}
		Ok(changed)
	}

	fn write_themes(&mut self, spotify_id: &str, themes: &str, lyrics: Option<&str>) -> Result<bool> {
		let Some(row) = self.rows.iter_mut().find(|r| r.spotify_id == spotify_id) else {
			return Ok(false);
		};
		row.song_themes = Some(themes.to_string());
		row.lyrics = lyrics.map(str::to_string);
		self.save()?;
		Ok(true)
	}
}
