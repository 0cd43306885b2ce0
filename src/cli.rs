use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn parse_threshold(s: &str) -> Result<f32, String> {
	let val: f32 = s.parse().map_err(|_| format!("'{s}' is not a valid number"))?;
	if !(-1.0..=1.0).contains(&val) {
		Err(format!("threshold must be between -1.0 and 1.0, got {val}"))
	} else {
		Ok(val)
	}
}

#[derive(Parser, Debug)]
#[command(
	name = "sift",
	author,
	version,
	about = "Embedding-based near-duplicate image grouping",
	disable_help_subcommand = true
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Path to a JSON configuration document
	#[arg(short = 'c', long = "config", global = true)]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Cluster precomputed embeddings into groups of near-duplicates
	Cluster {
		/// Directory containing .npy embedding files
		#[arg(short = 'd', long = "embedding-dir")]
		embedding_dir: PathBuf,

		/// Where to write the result artifact (default from config)
		#[arg(short = 'o', long = "output-dir")]
		output_dir: Option<PathBuf>,

		/// Similarity threshold, overrides the configured default
		#[arg(short = 't', long = "threshold", value_parser = parse_threshold)]
		threshold: Option<f32>,
	},

	/// Render one collage image per cluster
	Visualize {
		/// Clustering result JSON file
		#[arg(short = 'r', long = "result-file")]
		result_file: PathBuf,

		/// Directory containing the original images
		#[arg(short = 'd', long = "image-dir")]
		image_dir: PathBuf,

		/// Where to write the collages (default from config)
		#[arg(short = 'o', long = "output-dir")]
		output_dir: Option<PathBuf>,
	},

	/// Delete all but one representative image per cluster
	Remove {
		/// Clustering result JSON file
		#[arg(short = 'r', long = "result-file")]
		result_file: PathBuf,

		/// Directory containing the original images
		#[arg(short = 'd', long = "image-dir")]
		image_dir: PathBuf,

		/// Keep the last member of each cluster instead of the first
		#[arg(long = "keep-last")]
		keep_last: bool,

		/// Skip the confirmation prompt
		#[arg(short = 'y', long = "yes")]
		yes: bool,
	},
}
