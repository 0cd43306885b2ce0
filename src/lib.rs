//! # Sift Library
//!
//! Embedding-based near-duplicate image grouping.
//! Clusters precomputed image embeddings by cosine similarity and
//! provides collage visualization and duplicate removal on top.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod processing;
pub mod storage;
pub mod ui;
