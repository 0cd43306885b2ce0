//! Pairwise similarity graph for one batch

use rayon::prelude::*;

use crate::core::Embedding;

/// Computes the edge set of the batch similarity graph.
///
/// Every unordered pair `(i, j)` with `i < j` is compared exhaustively;
/// an edge exists iff the similarity is strictly greater than the
/// threshold. Equality does not connect — cluster membership at the
/// boundary depends on this exact comparison.
///
/// Rows are computed in parallel but collected in row order, so the
/// returned edges are always sorted by `i`, then `j`.
pub fn similarity_edges(batch: &[Embedding], threshold: f32) -> Vec<(usize, usize)> {
	let n = batch.len();

	(0..n)
		.into_par_iter()
		.map(|i| {
			let mut row = Vec::new();
			for j in (i + 1)..n {
				if batch[i].similarity(&batch[j]) > threshold {
					row.push((i, j));
				}
			}
			row
		})
		.collect::<Vec<_>>()
		.into_iter()
		.flatten()
		.collect()
}
