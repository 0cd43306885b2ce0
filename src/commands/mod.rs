//! # Command Implementations
//!
//! Each submodule handles one CLI command (cluster, visualize, remove).

pub mod cluster;
pub mod remove;
pub mod visualize;
