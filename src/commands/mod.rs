//! # Command Implementations
//!
//! Each submodule handles one CLI command (score, rate, anchors).

pub mod anchors;
pub mod rate;
pub mod score;

use anyhow::{Context, Result};
use std::time::Instant;

use crate::config::{ModelPaths, ScoringConfig, EMBED_DIR};
use crate::models::{Embedder, OnnxEncoder};
use crate::ui;

/// Load the ONNX encoder and wrap it for the configured window.
pub fn load_embedder(config: &ScoringConfig) -> Result<Embedder<OnnxEncoder>> {
	let paths = ModelPaths::discover().with_context(|| {
		format!(
			"Models directory not found. Pass --models-dir or set {} (expects {}/)",
			crate::config::MODELS_DIR_ENV,
			EMBED_DIR
		)
	})?;
	if !OnnxEncoder::is_available(&paths) {
		anyhow::bail!(
			"Embedding model missing: expected {} and {}",
			paths.model.display(),
			paths.tokenizer.display()
		);
	}

	ui::info("Loading embedding model...");
	let start = Instant::now();
	let encoder = OnnxEncoder::load(&paths, config.token_type_ids)?;
	ui::success(&format!("Model ready in {:.2}s", start.elapsed().as_secs_f32()));

	Ok(Embedder::new(encoder, config.window)?)
}
