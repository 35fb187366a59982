//! Sliding-window spans over a token sequence

use std::ops::Range;

/// Spans of at most `window` tokens covering a sequence of `len` tokens.
///
/// A sequence that fits yields one span. A longer one yields windows of
/// exactly `window` tokens with a stride of `window / 2`, plus a final
/// window aligned to the end when the stride leaves trailing tokens
/// uncovered.
///
/// The tail window differs from a plain stride walk for every length that
/// does not land on a stride boundary: 18 tokens at window 8 give
/// `0..8, 4..12, 8..16, 10..18`, where the stride walk alone stops at
/// `8..16` and drops the last two tokens.
pub fn window_spans(len: usize, window: usize) -> Vec<Range<usize>> {
	if window == 0 || len == 0 {
		return Vec::new();
	}
	if len <= window {
		return vec![0..len];
	}

	let stride = (window / 2).max(1);
	let mut spans: Vec<Range<usize>> = (0..=len - window)
		.step_by(stride)
		.map(|start| start..start + window)
		.collect();

	if spans.last().is_some_and(|last| last.end < len) {
		spans.push(len - window..len);
	}
	spans
}
