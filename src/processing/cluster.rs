//! Batch orchestration
//!
//! Drives the full clustering pass: stream embeddings in discovery
//! order, cut them into contiguous batches, build the similarity graph
//! and extract components per batch, and accumulate clusters in order.
//!
//! Clustering is strictly local to a batch: two images in different
//! batches are never compared, even if they are near-identical. Batching
//! is a throughput and memory control, and a true duplicate pair split
//! across a batch boundary stays split. This matches the reference
//! behavior and must not be "fixed" here.

use crate::core::{Embedding, LoadError};
use crate::processing::{components, graph};
use crate::storage::EmbeddingLoader;
use crate::ui;

/// Accumulated output of one clustering run.
#[derive(Debug)]
pub struct ClusterRun {
	/// Clusters in batch order, then within-batch discovery order
	pub clusters: Vec<Vec<String>>,
	/// Every embedding examined, clustered or not
	pub total_images: usize,
}

/// Runs the batch pipeline over all discovered embeddings.
///
/// The first load failure aborts the run; no partial result survives.
pub fn run(
	loader: &EmbeddingLoader,
	threshold: f32,
	batch_size: usize,
) -> Result<ClusterRun, LoadError> {
	debug_assert!(batch_size > 0);

	let total_batches = loader.len().div_ceil(batch_size);
	let mut stream = loader.stream();
	let mut clusters: Vec<Vec<String>> = Vec::new();
	let mut total_images = 0;

	for batch_idx in 1..=total_batches {
		let batch: Vec<Embedding> = stream
			.by_ref()
			.take(batch_size)
			.collect::<Result<_, _>>()?;
		total_images += batch.len();

		let before = clusters.len();
		cluster_batch(&batch, threshold, &mut clusters);

		ui::info(&format!(
			"Batch {}/{}: {} images, {} clusters",
			batch_idx,
			total_batches,
			batch.len(),
			clusters.len() - before
		));
	}

	Ok(ClusterRun {
		clusters,
		total_images,
	})
}

/// Clusters a single batch and appends the results.
///
/// The batch graph and its components are dropped on return; only the
/// id lists survive into the run-wide accumulator.
fn cluster_batch(batch: &[Embedding], threshold: f32, clusters: &mut Vec<Vec<String>>) {
	let edges = graph::similarity_edges(batch, threshold);

	for group in components::duplicate_components(batch.len(), &edges) {
		clusters.push(group.into_iter().map(|i| batch[i].id.clone()).collect());
	}
}
