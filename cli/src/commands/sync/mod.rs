//! # Shibtools Sync Command
//!
//! File: cli/src/commands/sync/mod.rs
//!
//! ## Overview
//!
//! This module implements `shibtools sync`, the build-manifest synchronizer.
//! Given an engine module directory it rewrites the `header_files`,
//! `source_files`, and `extra_files` array sections of that directory's
//! `meson.build` to the sorted, deduplicated, slash-normalized list of files
//! currently on disk, leaving every other byte of the manifest untouched.
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Check preconditions: the root exists and is a directory, and a regular
//!    `meson.build` file sits directly inside it. Failures print one line and
//!    terminate before anything is modified.
//! 2. Build the three extension groups from the defaults, the configuration,
//!    and the command-line options.
//! 3. Scan the tree once per group. Headers and extra files always scan
//!    unbounded; sources honor the `--depth` option (negative = unbounded).
//! 4. Compose all section rewrites in memory, in order: headers, sources,
//!    then extras. The extras section is skipped entirely when its group
//!    matched no files, preserving hand-maintained content.
//! 5. Write the manifest back in a single whole-file write. A structural
//!    error in any section therefore leaves the file byte-identical on disk.
//!
//! ## Examples
//!
//! ```bash
//! # Regenerate the file lists for a module, scanning all subdirectories
//! shibtools sync src/Modules/Graphics
//!
//! # Only list sources directly in the module root; add .mm to the source set
//! shibtools sync src/Modules/Input --depth 0 --source-ext mm
//! ```
//!
use crate::common::fs::io;
use crate::common::fs::scan::{self, DepthPolicy};
use crate::core::config::{self, Config};
use crate::core::error::{Result, ShibtoolsError};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

pub mod manifest;

use manifest::{
    EXTRA_FILES_MARKER, HEADER_FILES_MARKER, MANIFEST_FILE_NAME, SOURCE_FILES_MARKER,
};

/// Default extension sets per section. Command-line options and the `[sync]`
/// config section union extra extensions into these.
const DEFAULT_HEADER_EXTENSIONS: &[&str] = &["h", "hpp"];
const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx"];
const DEFAULT_EXTRA_EXTENSIONS: &[&str] = &["inl", "natvis"];

/// # Sync Arguments (`SyncArgs`)
///
/// Defines the command-line arguments accepted by `shibtools sync`.
#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Root directory to scan. Its `meson.build` is the file rewritten.
    directory: PathBuf,

    /// Extra extensions added to the header_files group (default: h, hpp).
    #[arg(long = "header-ext", value_name = "EXT")]
    header_ext: Vec<String>,

    /// Extra extensions added to the source_files group (default: c, cc, cpp, cxx).
    #[arg(long = "source-ext", value_name = "EXT")]
    source_ext: Vec<String>,

    /// Extra extensions added to the extra_files group (default: inl, natvis).
    #[arg(long = "extra-ext", value_name = "EXT")]
    extra_ext: Vec<String>,

    /// How many folders deep to search for source files. Negative means
    /// unbounded. Header and extra files are always collected unbounded.
    #[arg(long, short = 'd', default_value_t = -1, allow_negative_numbers = true)]
    depth: i64,
}

/// Entry point for `shibtools sync`: loads configuration, then runs the
/// synchronizer against the requested directory.
pub fn handle_sync(args: SyncArgs) -> Result<()> {
    let cfg = config::load_config()?;
    run_sync(&args, &cfg)
}

/// Runs the synchronizer with an explicit configuration. Split out from
/// `handle_sync` so tests can supply a `Config` directly.
pub fn run_sync(args: &SyncArgs, cfg: &Config) -> Result<()> {
    let root = &args.directory;

    // --- Preconditions: nothing is modified past this block on failure. ---
    if !root.is_dir() {
        anyhow::bail!(ShibtoolsError::Precondition(format!(
            "'{}' is not a directory.",
            root.display()
        )));
    }
    let manifest_path = root.join(MANIFEST_FILE_NAME);
    if !manifest_path.exists() {
        anyhow::bail!(ShibtoolsError::Precondition(format!(
            "No '{}' file in '{}'.",
            MANIFEST_FILE_NAME,
            root.display()
        )));
    }
    if !manifest_path.is_file() {
        anyhow::bail!(ShibtoolsError::Precondition(format!(
            "'{}' in '{}' is not a file.",
            MANIFEST_FILE_NAME,
            root.display()
        )));
    }

    let header_extensions = extension_group(
        DEFAULT_HEADER_EXTENSIONS,
        &cfg.sync.header_extensions,
        &args.header_ext,
    );
    let source_extensions = extension_group(
        DEFAULT_SOURCE_EXTENSIONS,
        &cfg.sync.source_extensions,
        &args.source_ext,
    );
    let extra_extensions = extension_group(
        DEFAULT_EXTRA_EXTENSIONS,
        &cfg.sync.extra_extensions,
        &args.extra_ext,
    );
    debug!(
        "Extension groups: headers={:?} sources={:?} extras={:?}",
        header_extensions, source_extensions, extra_extensions
    );

    // Headers and extras conventionally list the whole tree; only the source
    // list respects the depth option.
    let source_policy = DepthPolicy::from_cli_depth(args.depth);
    let headers = scan::collect_group(root, &header_extensions, DepthPolicy::Unbounded)?;
    let sources = scan::collect_group(root, &source_extensions, source_policy)?;
    let extras = scan::collect_group(root, &extra_extensions, DepthPolicy::Unbounded)?;

    // --- Compose every rewrite in memory before touching the file. ---
    let mut contents = io::read_file_to_string(&manifest_path)?;
    contents = manifest::rewrite_section(
        &contents,
        HEADER_FILES_MARKER,
        &manifest::format_entries(&headers),
    )
    .with_context(|| format!("Failed to rewrite '{}'", manifest_path.display()))?;
    contents = manifest::rewrite_section(
        &contents,
        SOURCE_FILES_MARKER,
        &manifest::format_entries(&sources),
    )
    .with_context(|| format!("Failed to rewrite '{}'", manifest_path.display()))?;
    if extras.is_empty() {
        debug!("No extra files found; leaving the extra_files section untouched.");
    } else {
        contents = manifest::rewrite_section(
            &contents,
            EXTRA_FILES_MARKER,
            &manifest::format_entries(&extras),
        )
        .with_context(|| format!("Failed to rewrite '{}'", manifest_path.display()))?;
    }

    io::write_string_to_file(&manifest_path, &contents)?;
    info!(
        "Synchronized '{}': {} header(s), {} source(s), {} extra file(s)",
        manifest_path.display(),
        headers.len(),
        sources.len(),
        extras.len()
    );
    Ok(())
}

/// Unions the built-in defaults with configured and command-line extensions,
/// preserving first-seen order and dropping duplicates.
fn extension_group(defaults: &[&str], configured: &[String], cli: &[String]) -> Vec<String> {
    let mut group: Vec<String> = Vec::with_capacity(defaults.len() + configured.len() + cli.len());
    for ext in defaults
        .iter()
        .map(|s| s.to_string())
        .chain(configured.iter().cloned())
        .chain(cli.iter().cloned())
    {
        if !group.contains(&ext) {
            group.push(ext);
        }
    }
    group
}
