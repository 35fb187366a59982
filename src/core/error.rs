//! Error taxonomy: per-item failures, embedding failures, fatal configuration

use std::path::PathBuf;
use thiserror::Error;

/// Why a single item ended up without a score. Never aborts a batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ItemError {
	#[error("no lyrics or theme text to score")]
	NoText,
	#[error("invalid tempo or valence value: tempo={tempo}, valence={valence}")]
	InvalidNumber { tempo: String, valence: String },
	#[error("text could not be embedded")]
	NoEmbedding,
}

/// Failures inside the text encoder. The embedder turns these into "no
/// embedding" after logging them.
#[derive(Debug, Error)]
pub enum EmbedError {
	#[error("failed to encode text: {0}")]
	Tokenize(#[source] tokenizers::Error),
	#[error("failed to build input tensor: {0}")]
	Tensor(#[from] ndarray::ShapeError),
	#[error("failed to run inference: {0}")]
	Inference(#[from] ort::Error),
	#[error("model output \"{name}\" missing from session results")]
	OutputMissing { name: String },
	#[error("unexpected model output shape {0:?}")]
	OutputShape(Vec<usize>),
	#[error("session mutex was poisoned by a previous panic")]
	SessionPoisoned,
	#[error("encoder received an empty token window")]
	EmptyWindow,
	#[error("window embeddings have mismatched dimensions")]
	RaggedWindows,
	#[error("{0}")]
	Model(String),
}

/// Problems that make a whole scoring run meaningless.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("no {group} anchor phrase produced an embedding")]
	EmptyAnchors { group: &'static str },
	#[error("token window must be greater than zero")]
	ZeroWindow,
	#[error("{name} weight must be finite and non-negative, got {value}")]
	InvalidWeight { name: &'static str, value: f64 },
	#[error("failed to read config at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse config at {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}
