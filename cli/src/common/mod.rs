//! # Shibtools Shared Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module aggregates utility modules shared across the command
//! implementations. Today that is the filesystem layer only; the module
//! boundary exists so future shared concerns land here rather than inside
//! a specific command.
//!

/// Filesystem utilities: basic I/O helpers and the extension-driven
/// directory scanner used by `shibtools sync`.
pub mod fs;
