//! Core domain types

pub mod embedding;
pub mod error;
pub mod result;

pub use embedding::Embedding;
pub use error::{ConfigError, LoadError, OutputError};
pub use result::{ClusteringResult, ResultMetadata};
