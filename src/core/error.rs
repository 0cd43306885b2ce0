//! Error taxonomy for the clustering pipeline
//!
//! All three variants are fatal: the run either completes and writes one
//! result artifact, or aborts with no artifact at all.

use std::path::PathBuf;

/// Configuration document could not be read or parsed.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
	#[error("failed to read config {path}: {source}")]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},
	#[error("malformed config {path}: {source}")]
	Parse {
		path: PathBuf,
		source: serde_json::Error,
	},
}

/// An embedding file could not be loaded. Aborts the whole run.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
	#[error("failed to read embedding dir {path}: {source}")]
	Dir {
		path: PathBuf,
		source: std::io::Error,
	},
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},
	#[error("invalid npy file {path}: {reason}")]
	Parse { path: PathBuf, reason: String },
	#[error("dimension mismatch in {path}: expected {expected}, got {actual}")]
	DimensionMismatch {
		path: PathBuf,
		expected: usize,
		actual: usize,
	},
}

/// The result artifact could not be written.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
	#[error("failed to serialize clustering result: {0}")]
	Serialize(#[from] serde_json::Error),
	#[error("failed to write {path}: {source}")]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},
}
