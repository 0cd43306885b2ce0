//! Cluster command - group near-duplicate images by embedding similarity

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use colored::*;

use crate::config::Config;
use crate::core::ClusteringResult;
use crate::processing;
use crate::storage::{output, EmbeddingLoader};
use crate::ui;

pub fn run(
	config: &Config,
	embedding_dir: &Path,
	output_dir: Option<&Path>,
	threshold: Option<f32>,
) -> Result<()> {
	let threshold = threshold.unwrap_or(config.clustering.threshold);
	let batch_size = config.clustering.batch_size;
	anyhow::ensure!(batch_size > 0, "clustering.batch_size must be at least 1");

	let output_dir = output_dir.unwrap_or(&config.output.result_dir);

	ui::header(&format!("─── Sift v{} ───", env!("CARGO_PKG_VERSION")));
	ui::debug(&format!(
		"threshold={}, batch_size={}, embedding_dir={}",
		threshold,
		batch_size,
		embedding_dir.display()
	));

	let start = Instant::now();

	let loader = EmbeddingLoader::discover(embedding_dir)?;
	if loader.is_empty() {
		// an empty run still completes and writes an empty artifact
		ui::warn(&format!(
			"No embedding files found in {}",
			embedding_dir.display()
		));
	} else {
		ui::info(&format!("Found {} embedding files", loader.len()));
	}

	let run = processing::cluster::run(&loader, threshold, batch_size)?;

	let result = ClusteringResult::new(
		threshold,
		run.total_images,
		run.clusters,
		output::timestamp(),
	);
	let path = output::write_result(output_dir, &result)?;

	ui::header("Results");
	println!("  {} {}", "Threshold:".bright_blue(), threshold);
	println!(
		"  {} {}",
		"Images:".bright_blue(),
		result.metadata.total_images
	);
	println!(
		"  {} {} ({} images clustered)",
		"Clusters:".bright_blue(),
		result.metadata.total_clusters,
		result.clustered_images()
	);
	println!(
		"  {} {:.2}s",
		"Duration:".bright_blue(),
		start.elapsed().as_secs_f32()
	);

	ui::success(&format!("Result saved to {}", path.display()));

	Ok(())
}
