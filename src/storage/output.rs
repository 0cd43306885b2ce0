//! Result artifact writing

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::core::{ClusteringResult, OutputError};

/// Wall-clock timestamp used in both the metadata and the artifact name.
pub fn timestamp() -> String {
	Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Writes the result as pretty JSON under `result_dir`.
///
/// The filename encodes threshold and timestamp so repeated runs with
/// different parameters never collide:
/// `clustering_result_threshold_<threshold>_<timestamp>.json`.
pub fn write_result(
	result_dir: &Path,
	result: &ClusteringResult,
) -> Result<PathBuf, OutputError> {
	fs::create_dir_all(result_dir).map_err(|source| OutputError::Io {
		path: result_dir.to_path_buf(),
		source,
	})?;

	let filename = format!(
		"clustering_result_threshold_{}_{}.json",
		result.metadata.threshold, result.metadata.timestamp
	);
	let path = result_dir.join(filename);

	let json = serde_json::to_string_pretty(result)?;
	fs::write(&path, json).map_err(|source| OutputError::Io {
		path: path.clone(),
		source,
	})?;

	Ok(path)
}

/// Reads a previously written result artifact (visualize/remove input).
pub fn read_result(path: &Path) -> anyhow::Result<ClusteringResult> {
	let text = fs::read_to_string(path)?;
	Ok(serde_json::from_str(&text)?)
}
