// End-to-end scoring through the public API with a word-axis encoder

mod support;

use songmood::config::ScoringConfig;
use songmood::core::{ConfigError, ItemError, ScoreInput};
use songmood::models::Embedder;
use songmood::processing::score_tracks;
use songmood::scoring::{AnchorPhrases, AnchorSet, HappinessScorer, MIN_SCORE};
use songmood::storage::{JsonTrackStore, TrackStore};
use support::{words, WordAxisEncoder};

const WINDOW: usize = 8;

fn embedder() -> Embedder<WordAxisEncoder> {
	Embedder::new(WordAxisEncoder::default(), WINDOW).unwrap()
}

#[test]
fn scores_stay_in_bounds() {
	let e = embedder();
	let scorer = HappinessScorer::new(&e, &ScoringConfig::default()).unwrap();

	let texts = ["joy", "grief", "river", "joy grief", "sunshine smile dance", "tears of despair"];
	for text in texts {
		for tempo in [-5.0, 0.0, 60.0, 160.0, 200.0, 240.0, 500.0] {
			for valence in [0.0, 0.5, 1.0] {
				let score = scorer.score(Some(text), Some(tempo), Some(valence)).unwrap();
				assert!((MIN_SCORE..=1.0).contains(&score), "{} {} {} -> {}", text, tempo, valence, score);
			}
		}
	}
}

#[test]
fn defaults_equal_explicit_neutral_values() {
	let e = embedder();
	let scorer = HappinessScorer::new(&e, &ScoringConfig::default()).unwrap();
	assert_eq!(
		scorer.score(Some("smile by the river"), None, None),
		scorer.score(Some("smile by the river"), Some(120.0), Some(0.5))
	);
}

#[test]
fn faster_tempo_never_lowers_the_score() {
	let e = embedder();
	let scorer = HappinessScorer::new(&e, &ScoringConfig::default()).unwrap();

	let mut prev = 0.0;
	for bpm in (0..=300).step_by(10) {
		let score = scorer.score(Some("river"), Some(bpm as f64), Some(0.5)).unwrap();
		assert!(score >= prev);
		prev = score;
	}
}

#[test]
fn override_wins_regardless_of_audio() {
	let e = embedder();
	let scorer = HappinessScorer::new(&e, &ScoringConfig::default()).unwrap();

	for (tempo, valence) in [(None, None), (Some(240.0), Some(1.0)), (Some(10.0), Some(0.0))] {
		let score = scorer.score(Some("Joy amid Racial Violence"), tempo, valence).unwrap();
		assert_eq!(score, MIN_SCORE);
	}
}

#[test]
fn long_text_is_chunked_with_same_dimension() {
	let e = embedder();
	let at_limit = e.embed(&words(WINDOW)).unwrap();
	assert_eq!(e.encoder().windows(), 1);

	let over = e.embed(&words(WINDOW + 1)).unwrap();
	assert_eq!(e.encoder().windows(), 3);
	assert_eq!(at_limit.dim(), over.dim());
	assert_eq!(at_limit, over);
}

#[test]
fn blank_input_is_undefined_not_fatal() {
	let e = embedder();
	let scorer = HappinessScorer::new(&e, &ScoringConfig::default()).unwrap();
	assert_eq!(scorer.score_input(&ScoreInput::default()), Err(ItemError::NoText));
	assert_eq!(
		scorer.score_input(&ScoreInput::from_text(" ").with_theme("\n")),
		Err(ItemError::NoText)
	);
	assert!(scorer
		.score_input(&ScoreInput::from_text(" ").with_theme("sunshine").with_tempo(100.0).with_valence(0.9))
		.is_ok());
}

#[test]
fn empty_anchor_group_fails_the_run() {
	let e = embedder();
	let config = ScoringConfig {
		anchors: AnchorPhrases {
			reference: vec![],
			opposite: vec!["grief".into()],
		},
		..ScoringConfig::default()
	};
	assert!(matches!(
		HappinessScorer::new(&e, &config),
		Err(ConfigError::EmptyAnchors { group: "reference" })
	));
	assert!(AnchorSet::build(&e, &AnchorPhrases::default()).is_ok());
}

#[test]
fn batch_writes_back_only_scored_rows() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("tracks.json");
	std::fs::write(
		&path,
		r#"[
			{ "spotify_id": "1", "lyrics": "dance in the sunshine", "song_themes": "joy", "tempo": 128, "valence": 0.8 },
			{ "spotify_id": "2", "lyrics": null, "song_themes": "grief, mourning", "tempo": "72", "valence": "0.1" },
			{ "spotify_id": "3", "lyrics": "", "song_themes": "   ", "tempo": 100, "valence": 0.5 },
			{ "spotify_id": "4", "lyrics": "smile", "song_themes": "smile", "tempo": "quick", "valence": 0.5 },
			{ "spotify_id": "5", "lyrics": "old", "song_themes": "old", "happiness": 0.42 },
			{ "spotify_id": "6", "lyrics": "smile", "song_themes": "smile", "tempo": true, "valence": [0.5] }
		]"#,
	)
	.unwrap();

	let e = embedder();
	let scorer = HappinessScorer::new(&e, &ScoringConfig::default()).unwrap();

	let mut store = JsonTrackStore::open(&path).unwrap();
	let rows = store.pending().unwrap();
	assert_eq!(rows.len(), 5);

	let report = score_tracks(&scorer, &rows);
	assert_eq!(report.scored(), 2);
	assert_eq!(store.write_scores(&report.updates()).unwrap(), 2);

	let reopened = JsonTrackStore::open(&path).unwrap();
	let happiness: Vec<Option<f64>> = reopened.rows().iter().map(|r| r.happiness).collect();
	assert!(happiness[0].unwrap() > happiness[1].unwrap());
	assert_eq!(happiness[2], None);
	assert_eq!(happiness[3], None);
	assert_eq!(happiness[4], Some(0.42));
	assert_eq!(happiness[5], None);
}
