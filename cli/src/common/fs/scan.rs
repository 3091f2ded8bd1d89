//! # Shibtools Directory Scanner
//!
//! File: cli/src/common/fs/scan.rs
//!
//! ## Overview
//!
//! This module implements the extension-driven directory scanner behind
//! `shibtools sync`. Given a root directory, an extension group, and a
//! recursion policy, it produces the set of root-relative paths (forward
//! slashes, lexicographically sorted, deduplicated) of every file whose name
//! ends with `.<extension>` for any extension in the group.
//!
//! ## Architecture
//!
//! The scan is a single `walkdir` traversal per group:
//! - `DepthPolicy::Unbounded` walks the whole tree.
//! - `DepthPolicy::Bounded(d)` stops descending once a file would sit deeper
//!   than `d` subdirectory levels below the root (depth 0 = files directly in
//!   the root).
//! - Every directory entry is considered, hidden (dot-prefixed) ones
//!   included; completeness of the generated file lists takes priority over
//!   pruning. Engine module trees hold no VCS metadata, so there is nothing
//!   worth filtering.
//! - Results accumulate into a `BTreeSet`, which gives the lexicographic
//!   ordering and deduplication in one place.
//!
//! The depth policy is an explicit argument on every call; there is no shared
//! options state.
//!
//! ## Examples
//!
//! ```rust
//! let headers = scan::collect_group(root, &["h".into(), "hpp".into()], DepthPolicy::Unbounded)?;
//! let sources = scan::collect_group(root, &["cpp".into()], DepthPolicy::Bounded(0))?;
//! ```
//!
use crate::core::error::{Result, ShibtoolsError};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// How deep below the root a scan is allowed to look.
///
/// `Bounded(0)` matches files directly in the root only; `Bounded(1)` adds
/// files in immediate subdirectories, and so on. `Unbounded` recurses through
/// all subdirectories regardless of depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthPolicy {
    Unbounded,
    Bounded(usize),
}

impl DepthPolicy {
    /// Maps the command-line depth value onto a policy: any negative value
    /// (the default is -1) means unbounded recursion.
    pub fn from_cli_depth(depth: i64) -> Self {
        if depth < 0 {
            DepthPolicy::Unbounded
        } else {
            DepthPolicy::Bounded(depth as usize)
        }
    }
}

/// Collects every file under `root` matching one of the group's extensions,
/// subject to the depth policy.
///
/// # Arguments
///
/// * `root` - The directory to scan. Must exist and be a directory.
/// * `extensions` - Bare extension strings (e.g. `"h"`, `"cpp"`); a file
///   matches when its name ends with `.<extension>`.
/// * `policy` - How deep below `root` the scan may descend.
///
/// # Returns
///
/// The root-relative, forward-slash-normalized paths of all matches, sorted
/// lexicographically with duplicates removed.
///
/// # Errors
///
/// Returns `ShibtoolsError::Precondition` if `root` is not a directory.
/// Individual unreadable entries are logged and skipped, not fatal.
pub fn collect_group(
    root: &Path,
    extensions: &[String],
    policy: DepthPolicy,
) -> Result<BTreeSet<String>> {
    if !root.is_dir() {
        anyhow::bail!(ShibtoolsError::Precondition(format!(
            "'{}' is not a directory.",
            root.display()
        )));
    }

    // A file directly in the root sits at walkdir depth 1, so a section depth
    // of D translates to a walkdir depth cap of D + 1.
    let mut walker = WalkDir::new(root);
    if let DepthPolicy::Bounded(depth) = policy {
        walker = walker.max_depth(depth.saturating_add(1));
    }

    let suffixes: Vec<String> = extensions.iter().map(|ext| format!(".{ext}")).collect();
    let mut matches = BTreeSet::new();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Failed to access entry during walk in '{}': {}",
                    root.display(),
                    e
                );
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !suffixes.iter().any(|suffix| file_name.ends_with(suffix)) {
            continue;
        }

        match entry.path().strip_prefix(root) {
            Ok(relative) => {
                matches.insert(normalize_separators(relative));
            }
            Err(_) => {
                warn!(
                    "Could not determine relative path for '{}' based on '{}'",
                    entry.path().display(),
                    root.display()
                );
            }
        }
    }

    debug!(
        "Scan of '{}' for {:?} at {:?} matched {} file(s)",
        root.display(),
        extensions,
        policy,
        matches.len()
    );
    Ok(matches)
}

/// Joins path components with forward slashes so the manifest entries are
/// identical across platforms.
fn normalize_separators(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
