//! # Shibtools Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the shibtools CLI.
//! It provides a consistent approach to error management with detailed
//! error information for the two failure families the tool cares about:
//! precondition failures (detected before any file is touched) and
//! structural failures (the manifest file does not have the shape the
//! tool expects).
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ShibtoolsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Configuration errors
//! - Filesystem errors
//! - Sync preconditions (missing root, missing `meson.build`)
//! - Manifest structure errors (missing/duplicate markers, unterminated sections)
//! - Template rendering errors from the boilerplate generators
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !root.is_dir() {
//!     anyhow::bail!(ShibtoolsError::Precondition(format!(
//!         "'{}' is not a directory.",
//!         root.display()
//!     )));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the shibtools CLI.
#[derive(Error, Debug)]
pub enum ShibtoolsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// A check that must hold before any file is modified failed.
    /// The message is the complete user-facing diagnostic line.
    #[error("{0}")]
    Precondition(String),

    #[error("Section marker '{marker}' not found in the manifest file.")]
    MarkerNotFound { marker: String },

    #[error("Section marker '{marker}' occurs {count} times in the manifest file; expected exactly one.")]
    MarkerAmbiguous { marker: String, count: usize },

    #[error("Section '{marker}' has no closing ']' after the marker.")]
    UnterminatedSection { marker: String },

    #[error("Section '{marker}' contains a nested '[' before its closing ']'.")]
    NestedBracket { marker: String },

    #[error("Invalid class name '{name}': expected an ASCII alphanumeric identifier not starting with a digit.")]
    InvalidClassName { name: String },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
