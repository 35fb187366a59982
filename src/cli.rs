use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

/// Execution provider for ONNX Runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Provider {
	/// Auto-detect best available (TensorRT → CUDA → CoreML → XNNPACK → CPU)
	#[default]
	Auto,
	/// CPU only
	Cpu,
	/// NVIDIA CUDA GPU
	Cuda,
	/// NVIDIA TensorRT (optimized inference)
	Tensorrt,
	/// Apple CoreML (macOS only)
	Coreml,
	/// XNNPACK (optimized CPU kernels)
	Xnnpack,
}

fn parse_valence(s: &str) -> Result<f64, String> {
	let val: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if !(0.0..=1.0).contains(&val) {
		Err(format!("valence must be between 0.0 and 1.0, got {}", val))
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	let blue = Some(Color::Ansi(AnsiColor::Blue));
	Styles::styled()
		.header(Style::new().bold().fg_color(blue))
		.usage(Style::new().bold().fg_color(blue))
		.literal(Style::new().fg_color(blue))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(blue))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "songmood",
	author,
	version,
	about = "Embedding-based happiness scoring for songs",
	styles = styles(),
	after_help = format!(
		"{title}
  {bin} {score}    {score_args}   {score_desc}
  {bin} {rate}     {rate_args}    {rate_desc}
  {bin} {anchors}                           {anchors_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "songmood".bright_blue(),
		score = "score".yellow(),
		score_args = "-i tracks.json --csv out.csv",
		score_desc = "Score every pending track".dimmed(),
		rate = "rate".yellow(),
		rate_args = "\"sunny days\" --tempo 128",
		rate_desc = "Score a single text".dimmed(),
		anchors = "anchors".yellow(),
		anchors_desc = "Check anchor calibration".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Execution provider: auto, cpu, cuda, tensorrt, coreml, xnnpack
	#[arg(short = 'p', long = "provider", global = true, default_value = "auto")]
	pub provider: Provider,

	/// Directory holding the all-distilroberta-v1 model
	#[arg(long = "models-dir", global = true, value_name = "DIR")]
	pub models_dir: Option<PathBuf>,

	/// Scoring config (JSON); defaults apply to missing fields
	#[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Score every themed, unscored track in a track file
	Score {
		/// Track file (JSON array of rows)
		#[arg(short = 'i', long = "input", value_name = "FILE")]
		input: PathBuf,

		/// Where to write the CSV report
		#[arg(long = "csv", value_name = "FILE", default_value = crate::config::DEFAULT_CSV)]
		csv: PathBuf,

		/// Skip the CSV report
		#[arg(long = "no-csv")]
		no_csv: bool,

		/// Do not write scores back to the track file
		#[arg(short = 'n', long = "dry-run")]
		dry_run: bool,
	},

	/// Score one piece of text
	Rate {
		/// Lyrics or any text
		#[arg(value_name = "TEXT")]
		text: Option<String>,

		/// Theme text used when TEXT is missing or blank
		#[arg(short = 't', long = "theme")]
		theme: Option<String>,

		/// Tempo in BPM (default: 120)
		#[arg(long = "tempo")]
		tempo: Option<f64>,

		/// Valence 0.0-1.0 (default: 0.5)
		#[arg(long = "valence", value_parser = parse_valence)]
		valence: Option<f64>,
	},

	/// Embed the anchor phrases and report how each one scores
	Anchors,
}
