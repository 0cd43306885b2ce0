//! Clustering result types

use serde::{Deserialize, Serialize};

/// Run parameters and counts, serialized ahead of the clusters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultMetadata {
	/// Similarity threshold the run was performed with
	pub threshold: f32,
	/// Every embedding examined across all batches, clustered or not
	pub total_images: usize,
	/// Equals `clusters.len()`
	pub total_clusters: usize,
	/// Local wall-clock time at completion, `YYYYMMDD_HHMMSS`
	pub timestamp: String,
}

/// Complete clustering result for one run.
///
/// Each cluster lists its member image ids in ascending batch-local
/// index order; clusters appear in batch order, then discovery order
/// within the batch. Singletons are never emitted.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClusteringResult {
	pub metadata: ResultMetadata,
	pub clusters: Vec<Vec<String>>,
}

impl ClusteringResult {
	pub fn new(
		threshold: f32,
		total_images: usize,
		clusters: Vec<Vec<String>>,
		timestamp: String,
	) -> Self {
		Self {
			metadata: ResultMetadata {
				threshold,
				total_images,
				total_clusters: clusters.len(),
				timestamp,
			},
			clusters,
		}
	}

	/// Image count across all clusters (duplicates plus representatives).
	pub fn clustered_images(&self) -> usize {
		self.clusters.iter().map(|c| c.len()).sum()
	}
}
