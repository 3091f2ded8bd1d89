//! # Shibtools Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module acts as the primary interface for filesystem-related utility
//! functions within the shibtools CLI. It aggregates functionality from
//! specialized submodules.
//!
//! ## Architecture
//!
//! - **`io`**: Basic input/output operations: ensuring directories exist
//!   (`ensure_dir_exists`), reading files to strings (`read_file_to_string`),
//!   and writing strings to files (`write_string_to_file`).
//! - **`scan`**: The extension-driven directory scanner behind
//!   `shibtools sync`: given a root, an extension group, and a depth policy,
//!   it produces the sorted, deduplicated set of matching relative paths.
//!
//! Callers import the specific submodule they need (e.g.
//! `crate::common::fs::io::read_file_to_string`).
//!

pub mod io;
pub mod scan;
