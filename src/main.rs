//! Sift - embedding-based near-duplicate image grouping
//!
//! Clusters precomputed CLIP-style embeddings by cosine similarity,
//! renders per-cluster collages, and removes duplicate images.

use anyhow::Result;
use clap::Parser;

use sift::cli::{Cli, Command};
use sift::commands;
use sift::config::Config;
use sift::ui;

fn main() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);
	let config = Config::load(cli.config.as_deref())?;

	match cli.command {
		Command::Cluster {
			embedding_dir,
			output_dir,
			threshold,
		} => commands::cluster::run(&config, &embedding_dir, output_dir.as_deref(), threshold),
		Command::Visualize {
			result_file,
			image_dir,
			output_dir,
		} => commands::visualize::run(&config, &result_file, &image_dir, output_dir.as_deref()),
		Command::Remove {
			result_file,
			image_dir,
			keep_last,
			yes,
		} => commands::remove::run(&result_file, &image_dir, keep_last, yes),
	}
}
