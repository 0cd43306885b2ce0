//! Remove command - delete duplicate images, keeping one per cluster

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::IMAGE_EXTENSIONS;
use crate::storage::output;
use crate::ui;

pub fn run(result_file: &Path, image_dir: &Path, keep_last: bool, auto_confirm: bool) -> Result<()> {
	let result = output::read_result(result_file)
		.with_context(|| format!("failed to read {}", result_file.display()))?;

	ui::info(&format!(
		"Removing duplicates across {} clusters",
		result.clusters.len()
	));

	let doomed = collect_removals(&result.clusters, image_dir, keep_last);

	if doomed.is_empty() {
		ui::success("No duplicate images to remove");
		return Ok(());
	}

	ui::warn(&format!("{} duplicate images will be deleted", doomed.len()));

	if !auto_confirm {
		print!("\nDelete these images? [y/N]: ");
		io::stdout().flush()?;

		let mut input = String::new();
		io::stdin().read_line(&mut input)?;

		if !input.trim().eq_ignore_ascii_case("y") {
			ui::info("Cancelled");
			return Ok(());
		}
	}

	let mut removed = 0;
	let mut errors = 0;

	for path in doomed {
		match fs::remove_file(&path) {
			Ok(_) => {
				ui::debug(&format!("Deleted: {}", path.display()));
				removed += 1;
			}
			Err(e) => {
				ui::error(&format!("Failed to delete {}: {e}", path.display()));
				errors += 1;
			}
		}
	}

	ui::success(&format!("Removed {removed} duplicate images"));
	if errors > 0 {
		ui::warn(&format!("{errors} errors"));
	}

	Ok(())
}

/// Resolves every non-representative cluster member to a file path.
///
/// The representative is the first member (or last with `keep_last`).
/// Ids whose file cannot be found under any tried extension are skipped.
fn collect_removals(clusters: &[Vec<String>], image_dir: &Path, keep_last: bool) -> Vec<PathBuf> {
	let mut doomed = Vec::new();

	for cluster in clusters {
		if cluster.len() <= 1 {
			continue;
		}

		let representative = if keep_last {
			cluster.last()
		} else {
			cluster.first()
		};

		for id in cluster {
			if Some(id) == representative {
				continue;
			}
			if let Some(path) = find_image(image_dir, id) {
				doomed.push(path);
			} else {
				ui::debug(&format!("No file found for id '{id}', skipping"));
			}
		}
	}

	doomed
}

fn find_image(image_dir: &Path, id: &str) -> Option<PathBuf> {
	IMAGE_EXTENSIONS
		.iter()
		.map(|ext| image_dir.join(format!("{id}.{ext}")))
		.find(|p| p.exists())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs::File;

	#[test]
	fn keeps_first_member_by_default() {
		let dir = tempfile::tempdir().unwrap();
		for name in ["a.jpg", "b.jpg", "c.png"] {
			File::create(dir.path().join(name)).unwrap();
		}

		let clusters = vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]];
		let doomed = collect_removals(&clusters, dir.path(), false);

		assert_eq!(
			doomed,
			vec![dir.path().join("b.jpg"), dir.path().join("c.png")]
		);
	}

	#[test]
	fn keep_last_retains_final_member() {
		let dir = tempfile::tempdir().unwrap();
		for name in ["a.jpg", "b.jpg"] {
			File::create(dir.path().join(name)).unwrap();
		}

		let clusters = vec![vec!["a".to_string(), "b".to_string()]];
		let doomed = collect_removals(&clusters, dir.path(), true);

		assert_eq!(doomed, vec![dir.path().join("a.jpg")]);
	}

	#[test]
	fn missing_files_are_skipped() {
		let dir = tempfile::tempdir().unwrap();
		File::create(dir.path().join("a.jpg")).unwrap();

		let clusters = vec![vec!["a".to_string(), "ghost".to_string()]];
		let doomed = collect_removals(&clusters, dir.path(), false);

		assert!(doomed.is_empty());
	}
}
