//! # Shibtools Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes fundamental filesystem input/output operations
//! required by the shibtools commands. It provides convenient, robust
//! wrappers around standard library `std::fs` functions for tasks such as
//! ensuring directories exist, reading entire files into strings, and
//! writing string content back to files.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing,
//!   and validates that an existing path is actually a directory.
//! - **`read_file_to_string`**: `fs::read_to_string` with error context.
//! - **`write_string_to_file`**: Writes a string to a path, creating the
//!   parent directory first. Overwrites existing content; this is the single
//!   whole-file write the synchronizer performs after composing all section
//!   rewrites in memory.
//!
//! ## Usage
//!
//! - `sync` uses `read_file_to_string`/`write_string_to_file` on `meson.build`.
//! - `gen component`/`gen manager` use `ensure_dir_exists` and
//!   `write_string_to_file` when emitting the header/source pair.
//!
use crate::core::error::{Result, ShibtoolsError};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function attempts to create the
/// directory, including any necessary parent directories (similar to
/// `mkdir -p`). If the path already exists but is not a directory (e.g.,
/// it's a file), an error (`ShibtoolsError::FileSystem`) is returned.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the directory path to ensure exists.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ShibtoolsError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// A simple wrapper around `std::fs::read_to_string` that adds contextual
/// information to the error message if reading fails.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// Ensures the parent directory of the target `path` exists first (creating
/// it recursively if necessary), then writes the provided `content`.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The parent directory cannot be created.
/// - Writing to the file fails (e.g., permissions, I/O error).
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}
