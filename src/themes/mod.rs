//! # Theme Extraction
//!
//! Lyrics lookup and language-model prompting live behind traits; this
//! module owns the prompts, the cleanup of what comes back, the
//! fallback from lyrics to title-only prompting, and the pass over a
//! track store that fills in missing themes.

pub mod clean;

use anyhow::Result;

use crate::storage::TrackStore;
use crate::ui;

pub use clean::{artist_matches, clean_themes, clean_title, tidy_lyrics, unquote_it};

/// Token budget handed to the model for one theme reply.
pub const MAX_REPLY_TOKENS: usize = 1500;

/// One search result from a lyrics service.
#[derive(Debug, Clone, PartialEq)]
pub struct LyricsHit {
	/// Artist credit as the service reports it.
	pub artist: String,
	pub lyrics: String,
}

/// Somewhere lyrics can be looked up.
pub trait LyricsSource {
	/// Search results for the song, best match first.
	fn search(&self, artist: &str, title: &str) -> Result<Vec<LyricsHit>>;
}

/// A text-generation model.
pub trait ThemeModel {
	fn generate(&self, prompt: &str, max_tokens: usize) -> Result<String>;
}

/// Themes for one song and the lyrics they were derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeExtraction {
	pub themes: String,
	pub lyrics: Option<String>,
}

fn song(title: &str, artist: &str) -> String {
	format!("{} by {}", title, artist)
}

pub fn lyrics_prompt(title: &str, artist: &str, lyrics: &str) -> String {
	format!(
		"Without referring to it's musical qualities(don't call it a song, etc), provide a list of the top ten most prominent themes of {}. the lyrics are {}.  The response should be a single line of text formatted strictly as a comma-separated list (e.g., theme1, theme2, theme3, etc.) with no other content.",
		song(title, artist),
		lyrics
	)
}

pub fn title_prompt(title: &str, artist: &str) -> String {
	format!(
		"Without referring to it's musical qualities(don't call it a song, etc), provide list of the top ten most prominent themes of {}.   The response should be a single line of text formatted strictly as a comma-separated list (e.g., theme1, theme2, theme3, etc.) with no other content.",
		song(title, artist)
	)
}

/// Themes from lyrics when they can be found, from the title otherwise.
///
/// A failed lyrics lookup is logged and treated as "no lyrics"; a failed
/// model call is an error.
pub fn extract_themes<L, M>(source: &L, model: &M, artist: &str, title: &str) -> Result<ThemeExtraction>
where
	L: LyricsSource + ?Sized,
	M: ThemeModel + ?Sized,
{
	let search_title = clean_title(title);
	ui::debug(&format!("Searching for \"{}\" by {}...", search_title, artist));

	let hit = match source.search(artist, search_title) {
		Ok(hits) => {
			let hit = hits.into_iter().find(|h| artist_matches(artist, &h.artist));
			if hit.is_none() {
				ui::debug(&format!("No lyrics hit matching artist {}", artist));
			}
			hit
		}
		Err(e) => {
			ui::warn(&format!("Lyrics lookup failed for {}: {}", search_title, e));
			None
		}
	};
	let lyrics = hit.map(|h| tidy_lyrics(&h.lyrics)).filter(|l| !l.trim().is_empty());

	let prompt = match &lyrics {
		Some(l) => lyrics_prompt(title, artist, l),
		None => title_prompt(title, artist),
	};

	let reply = model.generate(&prompt, MAX_REPLY_TOKENS)?;
	let themes = clean_themes(&reply);
	ui::debug(&format!("Themes for {}: {}", title, themes));

	Ok(ThemeExtraction { themes, lyrics })
}

/// Outcome of one pass over the unthemed tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeReport {
	pub themed: usize,
	pub skipped: usize,
	pub failed: usize,
}

/// Extract and persist themes for every track that has none yet.
///
/// Rows without an artist or title are skipped and a failed extraction
/// is logged; neither stops the pass. Store errors do.
pub fn extract_pending<S, L, M>(store: &mut S, source: &L, model: &M) -> Result<ThemeReport>
where
	S: TrackStore + ?Sized,
	L: LyricsSource + ?Sized,
	M: ThemeModel + ?Sized,
{
	let rows = store.unthemed()?;
	ui::info(&format!("Found {} songs to process", rows.len()));

	let mut report = ThemeReport::default();
	for (i, row) in rows.iter().enumerate() {
		let artist = row.artist.as_deref().map(str::trim).filter(|a| !a.is_empty());
		let title = row.name.as_deref().map(str::trim).filter(|t| !t.is_empty());
		let (Some(artist), Some(title)) = (artist, title) else {
			ui::item_failed(&row.spotify_id, "missing artist or title");
			report.skipped += 1;
			continue;
		};

		ui::debug(&format!("Song #{} of {}: {} - {}", i + 1, rows.len(), artist, title));
		match extract_themes(source, model, artist, title) {
			Ok(extraction) => {
				store.write_themes(&row.spotify_id, &extraction.themes, extraction.lyrics.as_deref())?;
				ui::success(&format!("{}: {}", row.spotify_id, extraction.themes));
				report.themed += 1;
			}
			Err(e) => {
				ui::item_failed(&row.spotify_id, &format!("{:#}", e));
				report.failed += 1;
			}
		}
	}

	Ok(report)
}
