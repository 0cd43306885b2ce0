//! # User Interface
//!
//! Colored terminal output.

pub mod log;

pub use log::{debug, error, header, info, success, warn, Log};
