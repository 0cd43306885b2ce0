//! Application configuration
//!
//! One immutable `Config` value is constructed in `main` and passed by
//! reference into the commands. There is no process-wide mutable state;
//! CLI flags override individual fields before the value is frozen.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::ConfigError;

/// Extension of the embedding files the upstream encoder writes.
pub const EMBEDDING_EXT: &str = "npy";

/// Extensions tried, in order, when resolving a cluster member id back
/// to an image file.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
	pub model: ModelConfig,
	pub image: ImageConfig,
	pub clustering: ClusteringConfig,
	pub output: OutputConfig,
}

/// Encoder settings, consumed by the upstream embedding producer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
	pub name: String,
	pub device: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
	pub supported_formats: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
	pub threshold: f32,
	pub batch_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
	pub result_dir: PathBuf,
	pub visualization_dir: PathBuf,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			model: ModelConfig::default(),
			image: ImageConfig::default(),
			clustering: ClusteringConfig::default(),
			output: OutputConfig::default(),
		}
	}
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self {
			name: "openai/clip-vit-base-patch32".to_string(),
			device: "auto".to_string(),
		}
	}
}

impl Default for ImageConfig {
	fn default() -> Self {
		Self {
			supported_formats: IMAGE_EXTENSIONS.iter().map(|e| format!(".{e}")).collect(),
		}
	}
}

impl Default for ClusteringConfig {
	fn default() -> Self {
		Self {
			threshold: 0.94,
			batch_size: 1000,
		}
	}
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			result_dir: PathBuf::from("results/outputs"),
			visualization_dir: PathBuf::from("results/visualization"),
		}
	}
}

impl Config {
	/// Loads a config document, or the defaults when `path` is `None`.
	///
	/// A missing file is only an error when it was requested explicitly;
	/// a file that exists but does not parse is always fatal.
	pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
		let Some(path) = path else {
			return Ok(Self::default());
		};

		let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;

		serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}
}
