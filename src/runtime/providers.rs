//! Execution provider selection

use anyhow::{Context, Result};
use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use ort::session::Session;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::ui;

pub use crate::cli::Provider;

static SELECTED_PROVIDER: OnceLock<Provider> = OnceLock::new();
static PROVIDER_LOGGED: AtomicBool = AtomicBool::new(false);

/// Choose the execution provider for every session created afterwards.
/// Only the first call has an effect.
pub fn set_provider(p: Provider) {
	let _ = SELECTED_PROVIDER.set(p);
}

pub fn selected_provider() -> Provider {
	SELECTED_PROVIDER.get().copied().unwrap_or_default()
}

fn announce(msg: &str) {
	if !PROVIDER_LOGGED.swap(true, Ordering::Relaxed) {
		ui::info(msg);
	}
}

pub fn create_session(model_path: &Path) -> Result<Session> {
	let mut builder = Session::builder().context("Failed to create session builder")?;

	let registered = match selected_provider() {
		Provider::Auto => register_best(&mut builder),
		Provider::Cpu => Some("CPU (forced)"),
		Provider::Cuda => try_cuda(&mut builder).then_some("CUDA"),
		Provider::Tensorrt => try_tensorrt(&mut builder).then_some("TensorRT"),
		Provider::Coreml => try_coreml(&mut builder).then_some("CoreML"),
		Provider::Xnnpack => try_xnnpack(&mut builder).then_some("XNNPACK"),
	};

	match registered {
		Some(name) => announce(&format!("Using {} execution provider", name)),
		None => {
			ui::error(&format!("{:?} requested but unavailable, falling back to CPU", selected_provider()));
			announce("Using CPU execution provider");
		}
	}

	builder
		.with_optimization_level(GraphOptimizationLevel::Level3)?
		.with_intra_threads(4)?
		.commit_from_file(model_path)
		.context("Failed to load model")
}

fn register_best(builder: &mut SessionBuilder) -> Option<&'static str> {
	if try_tensorrt(builder) {
		return Some("TensorRT");
	}
	if try_cuda(builder) {
		return Some("CUDA");
	}
	if try_coreml(builder) {
		return Some("CoreML");
	}
	if try_xnnpack(builder) {
		return Some("XNNPACK");
	}
	Some("CPU")
}

macro_rules! try_provider {
	($builder:expr, $provider_type:ty, $name:expr) => {{
		use ort::ep::ExecutionProvider;

		ui::debug(&format!("Trying provider: {}", $name));

		let provider = <$provider_type>::default();
		if !provider.is_available().unwrap_or(false) {
			ui::debug(&format!("{} not available", $name));
			return false;
		}

		match provider.register($builder) {
			Ok(_) => true,
			Err(e) => {
				ui::debug(&format!("{} registration failed: {}", $name, e));
				false
			}
		}
	}};
}

#[cfg(not(target_os = "macos"))]
fn try_cuda(builder: &mut SessionBuilder) -> bool {
	use ort::ep::CUDA;
	try_provider!(builder, CUDA, "CUDA")
}

#[cfg(not(target_os = "macos"))]
fn try_tensorrt(builder: &mut SessionBuilder) -> bool {
	use ort::ep::TensorRT;
	try_provider!(builder, TensorRT, "TensorRT")
}

#[cfg(target_os = "macos")]
fn try_cuda(_builder: &mut SessionBuilder) -> bool {
	false
}

#[cfg(target_os = "macos")]
fn try_tensorrt(_builder: &mut SessionBuilder) -> bool {
	false
}

#[cfg(target_os = "macos")]
fn try_coreml(builder: &mut SessionBuilder) -> bool {
	use ort::ep::CoreML;
	try_provider!(builder, CoreML, "CoreML")
}

#[cfg(not(target_os = "macos"))]
fn try_coreml(_builder: &mut SessionBuilder) -> bool {
	ui::debug("CoreML only available on macOS");
	false
}

fn try_xnnpack(builder: &mut SessionBuilder) -> bool {
	use ort::ep::XNNPACK;
	try_provider!(builder, XNNPACK, "XNNPACK")
}
