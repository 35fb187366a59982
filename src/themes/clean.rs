//! Cleanup of scraped lyrics and model replies

use regex::Regex;
use std::sync::LazyLock;

static LEADING_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.*?:\s*").expect("valid regex"));
static THEME_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Theme.*?,?\s*").expect("valid regex"));
static NUMBERING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\s*").expect("valid regex"));
static DOUBLE_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*,").expect("valid regex"));
static EDGE_COMMAS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*,\s*|\s*,\s*$").expect("valid regex"));
static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\[.*?\]").expect("valid regex"));
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Reduce a model reply to a bare comma-separated theme list.
pub fn clean_themes(reply: &str) -> String {
	let s = LEADING_LABEL.replace_all(reply, "");
	let s = THEME_WORD.replace_all(&s, "");
	let s = NUMBERING.replace_all(&s, "");
	let s = DOUBLE_COMMA.replace_all(&s, ",");
	let s = EDGE_COMMAS.replace_all(&s, "");
	unquote_it(s.trim())
}

/// Models like to write `"It"` when a song is named It.
pub fn unquote_it(text: &str) -> String {
	text.replace("\"It\"", "It")
}

/// Drop `[Chorus]`-style section headers and squeeze runs of blank lines.
pub fn tidy_lyrics(lyrics: &str) -> String {
	let s = SECTION_HEADER.replace_all(lyrics, "");
	BLANK_RUN.replace_all(&s, "\n\n").into_owned()
}

/// Search title without a " - Remastered"-style suffix.
pub fn clean_title(title: &str) -> &str {
	title.split(" - ").next().unwrap_or(title).trim()
}

/// Loose artist comparison used to accept a lyrics search hit.
pub fn artist_matches(searched: &str, found: &str) -> bool {
	let searched = searched.to_lowercase().replace('/', " ");
	let found = found.to_lowercase();
	searched.contains(&found) || found.contains(&searched)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_label_and_numbering() {
		assert_eq!(
			clean_themes("Here are the themes: 1. love, 2. loss, 3. hope"),
			"love, loss, hope"
		);
	}

	#[test]
	fn strips_theme_words_and_stray_commas() {
		assert_eq!(clean_themes("Theme love, Theme, loss,"), "love, loss");
		assert_eq!(clean_themes(", freedom, , rebellion ,"), "freedom, rebellion");
	}

	#[test]
	fn plain_list_is_untouched() {
		assert_eq!(clean_themes("nostalgia, youth, summer"), "nostalgia, youth, summer");
	}

	#[test]
	fn unquotes_it() {
		assert_eq!(clean_themes("fear, \"It\", childhood"), "fear, It, childhood");
	}

	#[test]
	fn lyrics_lose_headers_and_blank_runs() {
		let raw = "[Verse 1]\nhello\n\n\n\nworld\n[Chorus\n]\nagain";
		assert_eq!(tidy_lyrics(raw), "\nhello\n\nworld\n\nagain");
	}

	#[test]
	fn title_suffix_is_dropped() {
		assert_eq!(clean_title("Heroes - 2017 Remaster"), "Heroes");
		assert_eq!(clean_title("Heroes"), "Heroes");
	}

	#[test]
	fn artist_matching_is_loose() {
		assert!(artist_matches("Simon/Garfunkel", "simon garfunkel"));
		assert!(artist_matches("Queen", "Queen & David Bowie"));
		assert!(!artist_matches("Queen", "The Beatles"));
	}
}
