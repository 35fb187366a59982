//! # Text Embedding
//!
//! Encoder seam, ONNX-backed sentence encoder, and the chunking embedder
//! that turns arbitrary-length text into one vector.

pub mod chunk;
pub mod embedder;
pub mod encoder;
pub mod onnx;

pub use chunk::window_spans;
pub use embedder::Embedder;
pub use encoder::TextEncoder;
pub use onnx::OnnxEncoder;
