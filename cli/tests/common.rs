//! # Shibtools CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the integration
//! test files (`sync.rs`, `generate.rs`, `main_tests.rs`). Each `.rs` file in
//! `cli/tests/` is compiled as a separate test crate linked against the
//! `shibtools` binary crate.
//!

// Allow potentially unused code in this common module, as different test
// files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Creates an `assert_cmd::Command` pointing at the compiled `shibtools`
/// binary target for the current test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn shibtools_cmd() -> Command {
    Command::cargo_bin("shibtools").expect("Failed to find shibtools binary for testing")
}

/// Creates an empty file at `path`, creating parent directories as needed.
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();
}
