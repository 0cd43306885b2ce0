//! Visualize command - render one horizontal collage per cluster

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{imageops, RgbImage};

use crate::config::Config;
use crate::storage::output;
use crate::ui;

/// Fixed row height of every collage.
const ROW_HEIGHT: u32 = 300;
/// Collages wider than this wrap onto additional rows.
const MAX_WIDTH: u32 = 2000;
/// JPEG quality of the saved collages.
const JPEG_QUALITY: u8 = 95;

pub fn run(
	config: &Config,
	result_file: &Path,
	image_dir: &Path,
	output_dir: Option<&Path>,
) -> Result<()> {
	let result = output::read_result(result_file)
		.with_context(|| format!("failed to read {}", result_file.display()))?;

	let output_dir = output_dir.unwrap_or(&config.output.visualization_dir);
	fs::create_dir_all(output_dir)
		.with_context(|| format!("failed to create {}", output_dir.display()))?;

	ui::info(&format!(
		"Visualizing {} clusters from {}",
		result.clusters.len(),
		result_file.display()
	));

	let mut rendered = 0;
	for (idx, cluster) in result.clusters.iter().enumerate() {
		let cluster_no = idx + 1;
		let paths = resolve_members(cluster, image_dir, &config.image.supported_formats);

		if paths.is_empty() {
			ui::warn(&format!("Cluster {cluster_no} has no resolvable images"));
			continue;
		}

		let Some(collage) = build_collage(&paths) else {
			ui::warn(&format!("Cluster {cluster_no} has no decodable images"));
			continue;
		};

		let out_path = output_dir.join(format!("cluster_{cluster_no:03}.jpg"));
		save_collage(&collage, &out_path)
			.with_context(|| format!("failed to save {}", out_path.display()))?;

		ui::debug(&format!(
			"Cluster {cluster_no}: {} images -> {}",
			paths.len(),
			out_path.display()
		));
		rendered += 1;
	}

	ui::success(&format!(
		"Rendered {rendered} collages to {}",
		output_dir.display()
	));

	Ok(())
}

/// Resolves each cluster member id to an existing image file, trying the
/// supported extensions in configured preference order.
fn resolve_members(cluster: &[String], image_dir: &Path, formats: &[String]) -> Vec<PathBuf> {
	let mut paths = Vec::new();

	for id in cluster {
		for ext in formats {
			let candidate = image_dir.join(format!("{id}{ext}"));
			if candidate.exists() {
				paths.push(candidate);
				break;
			}
		}
	}

	paths
}

/// Joins the images horizontally at a fixed row height, wrapping onto new
/// rows past `MAX_WIDTH`. Undecodable images are logged and skipped.
fn build_collage(paths: &[PathBuf]) -> Option<RgbImage> {
	let mut tiles: Vec<RgbImage> = Vec::new();

	for path in paths {
		match image::open(path) {
			Ok(img) => {
				let scaled_width =
					((img.width() as u64 * ROW_HEIGHT as u64) / img.height().max(1) as u64) as u32;
				let resized = img
					.resize_exact(scaled_width.max(1), ROW_HEIGHT, FilterType::Lanczos3)
					.to_rgb8();
				tiles.push(resized);
			}
			Err(e) => ui::warn(&format!("Skipping {}: {e}", path.display())),
		}
	}

	if tiles.is_empty() {
		return None;
	}

	let total_width: u32 = tiles.iter().map(|t| t.width()).sum();

	let (canvas_width, rows) = if total_width > MAX_WIDTH {
		(MAX_WIDTH, count_rows(&tiles))
	} else {
		(total_width, 1)
	};

	let mut canvas = RgbImage::new(canvas_width, ROW_HEIGHT * rows);
	let (mut x, mut y) = (0u32, 0u32);

	for tile in &tiles {
		if x + tile.width() > canvas_width {
			x = 0;
			y += ROW_HEIGHT;
		}
		imageops::replace(&mut canvas, tile, x as i64, y as i64);
		x += tile.width();
	}

	Some(canvas)
}

/// Writes the collage as JPEG at the fixed quality setting.
fn save_collage(collage: &RgbImage, path: &Path) -> Result<()> {
	let file = fs::File::create(path)?;
	let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
	collage.write_with_encoder(encoder)?;
	Ok(())
}

fn count_rows(tiles: &[RgbImage]) -> u32 {
	let mut rows = 1;
	let mut x = 0;

	for tile in tiles {
		if x + tile.width() > MAX_WIDTH {
			x = 0;
			rows += 1;
		}
		x += tile.width();
	}

	rows
}
