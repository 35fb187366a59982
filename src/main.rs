//! songmood - embedding-based happiness scoring for songs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use songmood::cli::{Cli, Command};
use songmood::config::{self, ScoringConfig};
use songmood::{commands, runtime, ui};

fn main() {
	if let Err(e) = run() {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);
	runtime::set_provider(cli.provider);
	if let Some(dir) = cli.models_dir {
		config::set_model_dir(dir);
	}

	let scoring = ScoringConfig::load_or_default(cli.config.as_deref())?;

	print_header();

	match cli.command {
		Command::Score {
			input,
			csv,
			no_csv,
			dry_run,
		} => {
			let csv = (!no_csv).then_some(csv.as_path());
			commands::score::run(&input, csv, dry_run, &scoring)
		}
		Command::Rate {
			text,
			theme,
			tempo,
			valence,
		} => commands::rate::run(text.as_deref(), theme.as_deref(), tempo, valence, &scoring),
		Command::Anchors => commands::anchors::run(&scoring),
	}
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── songmood v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
