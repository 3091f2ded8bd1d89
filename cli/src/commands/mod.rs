//! # Shibtools Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates all top-level command groups that comprise the
//! shibtools CLI. It serves as the central point for importing and
//! re-exporting command modules to make them accessible to the main
//! application entry point (`main.rs`).
//!
//! ## Command Groups
//!
//! - `sync`: Build-manifest synchronization (`meson.build` file lists).
//! - `generate`: C++ boilerplate emission (`gen component` / `gen manager`).
//!
//! Each command group defines its own arguments structure and handler
//! function to process those arguments and implement the command's
//! functionality.
//!

/// Boilerplate generation for the recurring engine class patterns. Includes
/// the subcommands `component` and `manager`.
pub mod generate;
/// Build-manifest synchronization: rewrites the file-list sections of a
/// directory's `meson.build` from the files on disk.
pub mod sync;
