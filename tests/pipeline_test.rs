// End-to-end tests for the clustering pipeline

use std::fs;
use std::path::Path;

use sift::core::{ClusteringResult, LoadError};
use sift::processing;
use sift::storage::{output, EmbeddingLoader};

/// Writes `vector` as a v1.0 `.npy` file the way `np.save` lays it out.
fn write_npy(dir: &Path, id: &str, vector: &[f32]) {
	let header = format!(
		"{{'descr': '<f4', 'fortran_order': False, 'shape': ({},), }}",
		vector.len()
	);
	let mut padded = header.into_bytes();
	while (10 + padded.len() + 1) % 64 != 0 {
		padded.push(b' ');
	}
	padded.push(b'\n');

	let mut bytes = Vec::new();
	bytes.extend_from_slice(b"\x93NUMPY");
	bytes.extend_from_slice(&[1, 0]);
	bytes.extend_from_slice(&(padded.len() as u16).to_le_bytes());
	bytes.extend_from_slice(&padded);
	for v in vector {
		bytes.extend_from_slice(&v.to_le_bytes());
	}

	fs::write(dir.join(format!("{id}.npy")), bytes).unwrap();
}

/// Five unit vectors where sim(a,b)=0.96, sim(b,c)=0.95 and every other
/// pair scores well below 0.94.
fn write_scenario(dir: &Path) {
	write_npy(dir, "a", &[0.96, 0.28, 0.0]);
	write_npy(dir, "b", &[1.0, 0.0, 0.0]);
	write_npy(dir, "c", &[0.95, 0.0, 0.312_249_9]);
	write_npy(dir, "d", &[0.0, 1.0, 0.0]);
	write_npy(dir, "e", &[0.0, 0.0, 1.0]);
}

#[test]
fn single_batch_scenario() {
	let dir = tempfile::tempdir().unwrap();
	write_scenario(dir.path());

	let loader = EmbeddingLoader::discover(dir.path()).unwrap();
	assert_eq!(loader.len(), 5);

	let run = processing::cluster::run(&loader, 0.94, 5).unwrap();

	assert_eq!(run.total_images, 5);
	assert_eq!(run.clusters, vec![vec!["a", "b", "c"]]);
}

#[test]
fn threshold_boundary_is_strict() {
	let dir = tempfile::tempdir().unwrap();
	write_scenario(dir.path());

	let loader = EmbeddingLoader::discover(dir.path()).unwrap();
	// sim(b,c) is exactly 0.95: the strict comparison must drop that edge
	let run = processing::cluster::run(&loader, 0.95, 5).unwrap();

	assert_eq!(run.clusters, vec![vec!["a", "b"]]);
	assert_eq!(run.total_images, 5);
}

#[test]
fn batch_boundary_splits_clusters() {
	let dir = tempfile::tempdir().unwrap();
	// identical vectors, guaranteed above any threshold
	write_npy(dir.path(), "a", &[1.0, 0.0]);
	write_npy(dir.path(), "b", &[1.0, 0.0]);

	let loader = EmbeddingLoader::discover(dir.path()).unwrap();
	let run = processing::cluster::run(&loader, 0.9, 1).unwrap();

	// one per batch: never compared, never clustered
	assert!(run.clusters.is_empty());
	assert_eq!(run.total_images, 2);
}

#[test]
fn clusters_stay_within_their_batch() {
	let dir = tempfile::tempdir().unwrap();
	// batch 1: a,b identical; batch 2: c,d identical; b and c identical
	// across the boundary but must not merge
	write_npy(dir.path(), "a", &[1.0, 0.0]);
	write_npy(dir.path(), "b", &[1.0, 0.0]);
	write_npy(dir.path(), "c", &[1.0, 0.0]);
	write_npy(dir.path(), "d", &[1.0, 0.0]);

	let loader = EmbeddingLoader::discover(dir.path()).unwrap();
	let run = processing::cluster::run(&loader, 0.9, 2).unwrap();

	assert_eq!(run.clusters, vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn runs_are_deterministic() {
	let dir = tempfile::tempdir().unwrap();
	write_scenario(dir.path());

	let loader = EmbeddingLoader::discover(dir.path()).unwrap();
	let first = processing::cluster::run(&loader, 0.94, 2).unwrap();
	let second = processing::cluster::run(&loader, 0.94, 2).unwrap();

	assert_eq!(first.clusters, second.clusters);
	assert_eq!(first.total_images, second.total_images);
}

#[test]
fn files_load_in_lexicographic_order() {
	let dir = tempfile::tempdir().unwrap();
	write_npy(dir.path(), "10", &[1.0, 0.0]);
	write_npy(dir.path(), "2", &[1.0, 0.0]);
	write_npy(dir.path(), "1", &[1.0, 0.0]);

	let loader = EmbeddingLoader::discover(dir.path()).unwrap();
	let ids: Vec<String> = loader
		.stream()
		.map(|e| e.unwrap().id)
		.collect();

	assert_eq!(ids, vec!["1", "10", "2"]);
}

#[test]
fn dimension_mismatch_aborts_the_run() {
	let dir = tempfile::tempdir().unwrap();
	write_npy(dir.path(), "a", &[1.0, 0.0, 0.0]);
	write_npy(dir.path(), "b", &[1.0, 0.0]);

	let loader = EmbeddingLoader::discover(dir.path()).unwrap();
	let err = processing::cluster::run(&loader, 0.9, 10).unwrap_err();

	match err {
		LoadError::DimensionMismatch {
			expected, actual, ..
		} => {
			assert_eq!(expected, 3);
			assert_eq!(actual, 2);
		}
		other => panic!("expected dimension mismatch, got {other}"),
	}
}

#[test]
fn corrupt_file_aborts_the_run() {
	let dir = tempfile::tempdir().unwrap();
	write_npy(dir.path(), "a", &[1.0, 0.0]);
	fs::write(dir.path().join("b.npy"), b"not an npy file").unwrap();

	let loader = EmbeddingLoader::discover(dir.path()).unwrap();
	assert!(processing::cluster::run(&loader, 0.9, 10).is_err());
}

#[test]
fn empty_input_still_writes_an_artifact() {
	let dir = tempfile::tempdir().unwrap();
	let out = tempfile::tempdir().unwrap();

	let config = sift::config::Config::default();
	sift::commands::cluster::run(&config, dir.path(), Some(out.path()), Some(0.9)).unwrap();

	let artifacts: Vec<_> = fs::read_dir(out.path())
		.unwrap()
		.filter_map(|e| e.ok())
		.collect();
	assert_eq!(artifacts.len(), 1);

	let loaded = output::read_result(&artifacts[0].path()).unwrap();
	assert_eq!(loaded.metadata.total_images, 0);
	assert_eq!(loaded.metadata.total_clusters, 0);
	assert!(loaded.clusters.is_empty());
}

#[test]
fn result_artifact_round_trips() {
	let dir = tempfile::tempdir().unwrap();
	let out = tempfile::tempdir().unwrap();
	write_scenario(dir.path());

	let loader = EmbeddingLoader::discover(dir.path()).unwrap();
	let run = processing::cluster::run(&loader, 0.94, 5).unwrap();

	let result = ClusteringResult::new(0.94, run.total_images, run.clusters, output::timestamp());
	let path = output::write_result(out.path(), &result).unwrap();

	let name = path.file_name().unwrap().to_string_lossy().into_owned();
	assert!(name.starts_with("clustering_result_threshold_0.94_"));
	assert!(name.ends_with(".json"));

	let text = fs::read_to_string(&path).unwrap();
	// metadata precedes clusters, keys in declaration order
	assert!(text.find("\"metadata\"").unwrap() < text.find("\"clusters\"").unwrap());
	assert!(text.find("\"threshold\"").unwrap() < text.find("\"total_images\"").unwrap());
	assert!(text.find("\"total_images\"").unwrap() < text.find("\"total_clusters\"").unwrap());
	assert!(text.find("\"total_clusters\"").unwrap() < text.find("\"timestamp\"").unwrap());

	let loaded = output::read_result(&path).unwrap();
	assert_eq!(loaded.metadata.threshold, 0.94);
	assert_eq!(loaded.metadata.total_images, 5);
	assert_eq!(loaded.metadata.total_clusters, loaded.clusters.len());
	assert_eq!(loaded.clusters, vec![vec!["a", "b", "c"]]);
}
