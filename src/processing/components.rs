//! Connected components via union-find
//!
//! Path compression plus union by size gives near-linear extraction
//! without pulling in a graph library.

use std::collections::HashMap;

pub struct UnionFind {
	parent: Vec<usize>,
	size: Vec<usize>,
}

impl UnionFind {
	pub fn new(n: usize) -> Self {
		Self {
			parent: (0..n).collect(),
			size: vec![1; n],
		}
	}

	pub fn find(&mut self, x: usize) -> usize {
		let mut root = x;
		while self.parent[root] != root {
			root = self.parent[root];
		}
		// compress the walked path
		let mut node = x;
		while self.parent[node] != root {
			let next = self.parent[node];
			self.parent[node] = root;
			node = next;
		}
		root
	}

	pub fn union(&mut self, a: usize, b: usize) {
		let mut ra = self.find(a);
		let mut rb = self.find(b);
		if ra == rb {
			return;
		}
		if self.size[ra] < self.size[rb] {
			std::mem::swap(&mut ra, &mut rb);
		}
		self.parent[rb] = ra;
		self.size[ra] += self.size[rb];
	}
}

/// Extracts the components of size >= 2 from the batch graph with nodes
/// `0..n` and the given edges.
///
/// Scanning nodes in index order means components are discovered at
/// their smallest member, so the output is ordered by minimum index
/// and each component lists its members ascending. Isolated nodes are
/// valid size-1 components and are dropped here.
pub fn duplicate_components(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
	let mut dsu = UnionFind::new(n);
	for &(i, j) in edges {
		dsu.union(i, j);
	}

	let mut components: Vec<Vec<usize>> = Vec::new();
	let mut root_slot: HashMap<usize, usize> = HashMap::new();

	for node in 0..n {
		let root = dsu.find(node);
		let slot = *root_slot.entry(root).or_insert_with(|| {
			components.push(Vec::new());
			components.len() - 1
		});
		components[slot].push(node);
	}

	components.retain(|c| c.len() >= 2);
	components
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn merges_transitive_chain() {
		// a-b and b-c connect all three without a direct a-c edge
		let groups = duplicate_components(5, &[(0, 1), (1, 2)]);
		assert_eq!(groups, vec![vec![0, 1, 2]]);
	}

	#[test]
	fn drops_singletons() {
		let groups = duplicate_components(4, &[]);
		assert!(groups.is_empty());
	}

	#[test]
	fn orders_by_minimum_index() {
		let groups = duplicate_components(6, &[(4, 5), (0, 3), (1, 2)]);
		assert_eq!(groups, vec![vec![0, 3], vec![1, 2], vec![4, 5]]);
	}

	#[test]
	fn members_ascend_regardless_of_edge_order() {
		let groups = duplicate_components(4, &[(3, 0), (2, 0)]);
		assert_eq!(groups, vec![vec![0, 2, 3]]);
	}

	#[test]
	fn union_by_size_keeps_roots_consistent() {
		let mut dsu = UnionFind::new(4);
		dsu.union(0, 1);
		dsu.union(2, 3);
		dsu.union(1, 3);
		let root = dsu.find(0);
		assert!((0..4).all(|i| dsu.find(i) == root));
	}

	#[test]
	fn empty_graph() {
		assert!(duplicate_components(0, &[]).is_empty());
	}
}
