//! Sentence encoder on ONNX Runtime (all-distilroberta-v1)
//!
//! Tokenizes with HuggingFace tokenizers and mean-pools `last_hidden_state`.

use anyhow::{Context, Result};
use ndarray::{Array2, ArrayView2, Axis};
use ort::session::Session;
use ort::value::Value;
use std::sync::Mutex;
use tokenizers::Tokenizer;

use crate::config::ModelPaths;
use crate::core::EmbedError;
use crate::runtime;

use super::encoder::TextEncoder;

pub struct OnnxEncoder {
	session: Mutex<Session>,
	tokenizer: Tokenizer,
	token_type_ids: bool,
}

impl OnnxEncoder {
	pub fn load(paths: &ModelPaths, token_type_ids: bool) -> Result<Self> {
		if !paths.model.exists() {
			anyhow::bail!("Embedding model not found: {}", paths.model.display());
		}
		if !paths.tokenizer.exists() {
			anyhow::bail!("Tokenizer not found: {}", paths.tokenizer.display());
		}

		let session = runtime::create_session(&paths.model).context("Load embedding model")?;

		let mut tokenizer = Tokenizer::from_file(&paths.tokenizer)
			.map_err(|e| anyhow::anyhow!("Load tokenizer: {}", e))?;
		// Long texts are chunked by the embedder, so the tokenizer must see them whole.
		tokenizer
			.with_truncation(None)
			.map_err(|e| anyhow::anyhow!("Disable truncation: {}", e))?;
		tokenizer.with_padding(None);

		Ok(Self {
			session: Mutex::new(session),
			tokenizer,
			token_type_ids,
		})
	}

	/// Checks if embedding model files are available.
	pub fn is_available(paths: &ModelPaths) -> bool {
		paths.model.exists() && paths.tokenizer.exists()
	}
}

impl TextEncoder for OnnxEncoder {
	fn tokenize(&self, text: &str) -> Result<Vec<u32>, EmbedError> {
		let encoding = self.tokenizer.encode(text, true).map_err(EmbedError::Tokenize)?;
		Ok(encoding.get_ids().to_vec())
	}

	fn encode(&self, tokens: &[u32]) -> Result<Vec<f32>, EmbedError> {
		if tokens.is_empty() {
			return Err(EmbedError::EmptyWindow);
		}

		let seq_len = tokens.len();
		let input_ids: Vec<i64> = tokens.iter().map(|&x| x as i64).collect();

		let input_ids_val = Value::from_array(Array2::from_shape_vec((1, seq_len), input_ids)?)?;
		let attention_mask_val = Value::from_array(Array2::<i64>::ones((1, seq_len)))?;

		let mut session = self.session.lock().map_err(|_| EmbedError::SessionPoisoned)?;

		let outputs = if self.token_type_ids {
			let token_type_ids_val = Value::from_array(Array2::<i64>::zeros((1, seq_len)))?;
			session.run(ort::inputs![
				"input_ids" => input_ids_val,
				"attention_mask" => attention_mask_val,
				"token_type_ids" => token_type_ids_val,
			])?
		} else {
			session.run(ort::inputs![
				"input_ids" => input_ids_val,
				"attention_mask" => attention_mask_val,
			])?
		};

		let output = outputs.get("last_hidden_state").ok_or_else(|| EmbedError::OutputMissing {
			name: "last_hidden_state".to_string(),
		})?;

		let (shape, data) = output.try_extract_tensor::<f32>()?;
		let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();

		match dims.as_slice() {
			// [1, seq_len, hidden] - every position is a real token, so a plain mean
			[1, seq, hidden] => {
				let hidden_states = ArrayView2::from_shape((*seq, *hidden), data)?;
				hidden_states
					.mean_axis(Axis(0))
					.map(|pooled| pooled.to_vec())
					.ok_or(EmbedError::EmptyWindow)
			}
			_ => Err(EmbedError::OutputShape(dims)),
		}
	}
}
