//! Similarity graph construction and clustering

pub mod cluster;
pub mod components;
pub mod graph;
