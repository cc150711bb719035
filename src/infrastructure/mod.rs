//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves where the client keeps its configuration and trace
//! files, following the XDG base directory conventions.

pub mod paths;

pub use paths::{config_dir, config_file, data_dir, expand_tilde};
