//! Embedding input and result output

pub mod loader;
pub mod npy;
pub mod output;

pub use loader::EmbeddingLoader;
