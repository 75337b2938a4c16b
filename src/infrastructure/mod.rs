//! Infrastructure layer for filesystem and environment interactions.
//!
//! Zellij runs plugins in a WASI sandbox where the host filesystem is mounted
//! under `/host`. Paths supplied by the user in plugin configuration are mapped
//! into that mount here.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, trace_file_path};
