//! Embedding vectors for near-duplicate comparison

/// A single image embedding: the filename stem of the source image plus
/// its unit-normalized vector, as produced by the upstream encoder.
#[derive(Debug, Clone)]
pub struct Embedding {
	pub id: String,
	pub vector: Vec<f32>,
}

impl Embedding {
	pub fn new(id: impl Into<String>, vector: Vec<f32>) -> Self {
		Self { id: id.into(), vector }
	}

	pub fn dim(&self) -> usize {
		self.vector.len()
	}

	/// Cosine similarity with another embedding.
	///
	/// Vectors are unit-normalized by the producer, so this reduces to
	/// the dot product and stays in [-1.0, 1.0].
	pub fn similarity(&self, other: &Self) -> f32 {
		self.vector
			.iter()
			.zip(other.vector.iter())
			.map(|(a, b)| a * b)
			.sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn similarity_is_dot_product() {
		let a = Embedding::new("a", vec![1.0, 0.0]);
		let b = Embedding::new("b", vec![0.6, 0.8]);
		assert_eq!(a.similarity(&b), 0.6);
	}

	#[test]
	fn similarity_is_symmetric() {
		let a = Embedding::new("a", vec![0.6, 0.8, 0.0]);
		let b = Embedding::new("b", vec![0.0, 0.8, 0.6]);
		assert_eq!(a.similarity(&b), b.similarity(&a));
	}

	#[test]
	fn identical_vectors_score_one() {
		let a = Embedding::new("a", vec![0.6, 0.8]);
		let b = Embedding::new("b", vec![0.6, 0.8]);
		let sim = a.similarity(&b);
		assert!((sim - 1.0).abs() < 1e-6);
	}
}
