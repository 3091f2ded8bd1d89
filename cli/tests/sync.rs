//! # Shibtools CLI Sync Integration Tests
//!
//! File: cli/tests/sync.rs
//!
//! ## Overview
//!
//! Integration tests for `shibtools sync`, exercising the binary end to end
//! against temporary directory trees: section population, depth bounds,
//! idempotence, and the precondition/structural failure modes that must
//! leave the manifest untouched.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const EMPTY_MANIFEST: &str = "\
module_name = 'test'
header_files = []
source_files = []
extra_files = []
";

#[test]
fn test_sync_populates_sections_sorted_and_relative() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.h"));
    touch(&dir.path().join("sub/b.h"));
    touch(&dir.path().join("x.cpp"));
    fs::write(dir.path().join("meson.build"), EMPTY_MANIFEST).unwrap();

    shibtools_cmd()
        .args(["sync", dir.path().to_str().unwrap()])
        .assert()
        .success()
        // Success is silent: only the rewritten file is observable.
        .stdout(predicate::str::is_empty());

    let result = fs::read_to_string(dir.path().join("meson.build")).unwrap();
    assert_eq!(
        result,
        "\
module_name = 'test'
header_files = [
  'a.h',
  'sub/b.h',
]
source_files = [
  'x.cpp',
]
extra_files = []
"
    );
}

#[test]
fn test_sync_depth_zero_excludes_nested_sources() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.h"));
    touch(&dir.path().join("sub/b.h"));
    touch(&dir.path().join("x.cpp"));
    touch(&dir.path().join("sub/y.cpp"));
    fs::write(dir.path().join("meson.build"), EMPTY_MANIFEST).unwrap();

    shibtools_cmd()
        .args(["sync", dir.path().to_str().unwrap(), "--depth", "0"])
        .assert()
        .success();

    let result = fs::read_to_string(dir.path().join("meson.build")).unwrap();
    // Sources respect the bound; headers scan unbounded regardless.
    assert!(!result.contains("sub/y.cpp"));
    assert!(result.contains("'sub/b.h'"));
    assert!(result.contains("'x.cpp'"));
}

#[test]
fn test_sync_twice_is_byte_identical() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.h"));
    touch(&dir.path().join("x.cpp"));
    touch(&dir.path().join("debug.natvis"));
    fs::write(dir.path().join("meson.build"), EMPTY_MANIFEST).unwrap();

    shibtools_cmd()
        .args(["sync", dir.path().to_str().unwrap()])
        .assert()
        .success();
    let first = fs::read_to_string(dir.path().join("meson.build")).unwrap();

    shibtools_cmd()
        .args(["sync", dir.path().to_str().unwrap()])
        .assert()
        .success();
    let second = fs::read_to_string(dir.path().join("meson.build")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_sync_missing_root_prints_one_line_and_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does_not_exist");

    shibtools_cmd()
        .args(["sync", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory."));
}

#[test]
fn test_sync_missing_manifest_prints_one_line_and_fails() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.h"));

    shibtools_cmd()
        .args(["sync", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No 'meson.build' file in"));
}

#[test]
fn test_sync_missing_marker_leaves_manifest_untouched() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.h"));
    touch(&dir.path().join("x.cpp"));
    let manifest = "header_files = []\n# no source_files section here\n";
    fs::write(dir.path().join("meson.build"), manifest).unwrap();

    shibtools_cmd()
        .args(["sync", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source_files = ["));

    let on_disk = fs::read_to_string(dir.path().join("meson.build")).unwrap();
    assert_eq!(on_disk, manifest);
}

#[test]
fn test_sync_extra_extensions_from_cli() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("inline.hxx"));
    touch(&dir.path().join("x.cpp"));
    fs::write(dir.path().join("meson.build"), EMPTY_MANIFEST).unwrap();

    shibtools_cmd()
        .args([
            "sync",
            dir.path().to_str().unwrap(),
            "--header-ext",
            "hxx",
        ])
        .assert()
        .success();

    let result = fs::read_to_string(dir.path().join("meson.build")).unwrap();
    assert!(result.contains("'inline.hxx'"));
}
