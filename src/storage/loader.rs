//! Embedding discovery and streaming
//!
//! Discovery walks the embedding directory once and fixes the file order
//! (lexicographic by filename); loading happens lazily while streaming.
//! Any unreadable file or dimension mismatch aborts the run.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::EMBEDDING_EXT;
use crate::core::{Embedding, LoadError};
use crate::storage::npy;

pub struct EmbeddingLoader {
	files: Vec<PathBuf>,
}

impl EmbeddingLoader {
	/// Discovers all `.npy` files directly under `dir`, sorted by
	/// filename ascending.
	pub fn discover(dir: &Path) -> Result<Self, LoadError> {
		let mut files = Vec::new();

		for entry in WalkDir::new(dir).max_depth(1) {
			let entry = entry.map_err(|e| LoadError::Dir {
				path: dir.to_path_buf(),
				source: e
					.into_io_error()
					.unwrap_or_else(|| std::io::Error::other("walk error")),
			})?;

			let path = entry.path();
			if path.is_file()
				&& path.extension().and_then(|e| e.to_str()) == Some(EMBEDDING_EXT)
			{
				files.push(path.to_path_buf());
			}
		}

		files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

		Ok(Self { files })
	}

	pub fn len(&self) -> usize {
		self.files.len()
	}

	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}

	/// Starts a fresh pass over the discovered files.
	///
	/// The first embedding loaded by the stream fixes the expected
	/// dimension; every later mismatch is fatal.
	pub fn stream(&self) -> EmbeddingStream<'_> {
		EmbeddingStream {
			files: self.files.iter(),
			expected_dim: None,
		}
	}
}

pub struct EmbeddingStream<'a> {
	files: std::slice::Iter<'a, PathBuf>,
	expected_dim: Option<usize>,
}

impl EmbeddingStream<'_> {
	fn load(&mut self, path: &Path) -> Result<Embedding, LoadError> {
		let vector = npy::read_vector(path)?;

		match self.expected_dim {
			None => self.expected_dim = Some(vector.len()),
			Some(expected) if expected != vector.len() => {
				return Err(LoadError::DimensionMismatch {
					path: path.to_path_buf(),
					expected,
					actual: vector.len(),
				});
			}
			Some(_) => {}
		}

		let id = path
			.file_stem()
			.map(|s| s.to_string_lossy().into_owned())
			.unwrap_or_default();

		Ok(Embedding::new(id, vector))
	}
}

impl Iterator for EmbeddingStream<'_> {
	type Item = Result<Embedding, LoadError>;

	fn next(&mut self) -> Option<Self::Item> {
		let path = self.files.next()?.clone();
		Some(self.load(&path))
	}
}
