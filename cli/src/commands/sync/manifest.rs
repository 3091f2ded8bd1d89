//! # Shibtools Manifest Section Rewriting
//!
//! File: cli/src/commands/sync/manifest.rs
//!
//! ## Overview
//!
//! This module owns the text surgery performed on `meson.build`: locating a
//! named array section by its literal marker (`header_files = [`, etc.) and
//! replacing the span between the marker and its closing `]` with freshly
//! formatted file entries. Everything outside that span is preserved
//! byte-for-byte, so comments and unrelated build directives survive a run
//! untouched.
//!
//! ## Architecture
//!
//! - `format_entries` renders a scanned path set into the exact section body:
//!   one two-space-indented, single-quoted, comma-terminated path per line.
//! - `rewrite_section` splices a body into the manifest text. The marker must
//!   occur exactly once; zero or multiple occurrences abort the run before
//!   anything is written. A marker with no closing `]`, or with a nested `[`
//!   before it, is rejected as malformed.
//!
//! Rewrites are pure string-to-string transformations; the caller composes
//! all of them in memory and performs a single file write afterwards, so a
//! structural error in any section leaves the file on disk byte-identical.
//!
//! ## Examples
//!
//! Given a manifest containing `header_files = [\n  'old.h',\n]`, rewriting
//! with entries for `a.h` and `sub/b.h` produces:
//!
//! ```text
//! header_files = [
//!   'a.h',
//!   'sub/b.h',
//! ]
//! ```
//!
use crate::core::error::{Result, ShibtoolsError};
use std::collections::BTreeSet;

/// Name of the build manifest the synchronizer targets, located directly
/// inside the scanned root directory.
pub const MANIFEST_FILE_NAME: &str = "meson.build";

/// The three recognized manifest sections and their literal markers.
pub const HEADER_FILES_MARKER: &str = "header_files = [";
pub const SOURCE_FILES_MARKER: &str = "source_files = [";
pub const EXTRA_FILES_MARKER: &str = "extra_files = [";

/// Renders a scanned path set into the textual body of a manifest section.
///
/// Each entry becomes `  '<path>',\n`. The input is already sorted and
/// deduplicated (it comes out of the scanner as a `BTreeSet`), so the output
/// is byte-stable across repeated runs on an unchanged file set.
pub fn format_entries(paths: &BTreeSet<String>) -> String {
    let mut body = String::new();
    for path in paths {
        body.push_str("  '");
        body.push_str(path);
        body.push_str("',\n");
    }
    body
}

/// Replaces the contents of one manifest section.
///
/// Locates `marker` in `contents`, then replaces everything between the end
/// of the marker and the next `]` with a newline followed by `body`. The
/// closing bracket and all surrounding text are preserved unchanged.
///
/// # Errors
///
/// - `MarkerNotFound` if the marker does not occur.
/// - `MarkerAmbiguous` if the marker occurs more than once; duplicate markers
///   are rejected outright instead of silently rewriting the first.
/// - `UnterminatedSection` if no `]` follows the marker.
/// - `NestedBracket` if a `[` appears between the marker and its closing `]`.
pub fn rewrite_section(contents: &str, marker: &str, body: &str) -> Result<String> {
    let occurrences: Vec<usize> = contents.match_indices(marker).map(|(i, _)| i).collect();
    let start = match occurrences.as_slice() {
        [] => {
            anyhow::bail!(ShibtoolsError::MarkerNotFound {
                marker: marker.to_string(),
            })
        }
        [single] => single + marker.len(),
        _ => {
            anyhow::bail!(ShibtoolsError::MarkerAmbiguous {
                marker: marker.to_string(),
                count: occurrences.len(),
            })
        }
    };

    let section_rest = &contents[start..];
    let close_offset = match section_rest.find(']') {
        Some(offset) => offset,
        None => {
            anyhow::bail!(ShibtoolsError::UnterminatedSection {
                marker: marker.to_string(),
            })
        }
    };
    if section_rest[..close_offset].contains('[') {
        anyhow::bail!(ShibtoolsError::NestedBracket {
            marker: marker.to_string(),
        });
    }

    let mut rewritten =
        String::with_capacity(start + 1 + body.len() + (contents.len() - start - close_offset));
    rewritten.push_str(&contents[..start]);
    rewritten.push('\n');
    rewritten.push_str(body);
    rewritten.push_str(&contents[start + close_offset..]);
    Ok(rewritten)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn entry_set(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_format_entries_shape() {
        let body = format_entries(&entry_set(&["a.h", "sub/b.h"]));
        assert_eq!(body, "  'a.h',\n  'sub/b.h',\n");
    }

    #[test]
    fn test_format_entries_empty() {
        assert_eq!(format_entries(&BTreeSet::new()), "");
    }

    #[test]
    fn test_rewrite_replaces_only_the_section() -> Result<()> {
        let manifest = "\
# engine module
header_files = [
  'stale.h',
]

module_lib = static_library('mod', source_files)
";
        let body = format_entries(&entry_set(&["a.h", "sub/b.h"]));
        let rewritten = rewrite_section(manifest, HEADER_FILES_MARKER, &body)?;
        assert_eq!(
            rewritten,
            "\
# engine module
header_files = [
  'a.h',
  'sub/b.h',
]

module_lib = static_library('mod', source_files)
"
        );
        Ok(())
    }

    #[test]
    fn test_rewrite_empty_section_gains_entries() -> Result<()> {
        let manifest = "source_files = []\n";
        let body = format_entries(&entry_set(&["x.cpp"]));
        let rewritten = rewrite_section(manifest, SOURCE_FILES_MARKER, &body)?;
        assert_eq!(rewritten, "source_files = [\n  'x.cpp',\n]\n");
        Ok(())
    }

    #[test]
    fn test_rewrite_is_idempotent() -> Result<()> {
        let manifest = "header_files = []\ntail\n";
        let body = format_entries(&entry_set(&["a.h"]));
        let once = rewrite_section(manifest, HEADER_FILES_MARKER, &body)?;
        let twice = rewrite_section(&once, HEADER_FILES_MARKER, &body)?;
        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn test_rewrite_to_empty_body() -> Result<()> {
        let manifest = "header_files = [\n  'gone.h',\n]\n";
        let rewritten = rewrite_section(manifest, HEADER_FILES_MARKER, "")?;
        assert_eq!(rewritten, "header_files = [\n]\n");
        Ok(())
    }

    #[test]
    fn test_missing_marker_is_fatal() {
        let result = rewrite_section("unrelated = []\n", SOURCE_FILES_MARKER, "");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("not found in the manifest file"));
    }

    #[test]
    fn test_duplicate_marker_is_rejected() {
        let manifest = "header_files = []\nheader_files = []\n";
        let result = rewrite_section(manifest, HEADER_FILES_MARKER, "");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occurs 2 times"));
    }

    #[test]
    fn test_unterminated_section_is_rejected() {
        let result = rewrite_section("header_files = [\n", HEADER_FILES_MARKER, "");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("no closing ']'"));
    }

    #[test]
    fn test_nested_bracket_is_rejected() {
        let manifest = "header_files = [\n  'a.h',\n  [nested],\n]\n";
        let result = rewrite_section(manifest, HEADER_FILES_MARKER, "");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("nested '['"));
    }

    #[test]
    fn test_sequential_rewrites_leave_other_sections_locatable() -> Result<()> {
        let manifest = "header_files = []\nsource_files = []\nextra_files = []\n";
        let headers = format_entries(&entry_set(&["a.h"]));
        let sources = format_entries(&entry_set(&["x.cpp"]));

        let pass_one = rewrite_section(manifest, HEADER_FILES_MARKER, &headers)?;
        let pass_two = rewrite_section(&pass_one, SOURCE_FILES_MARKER, &sources)?;
        assert_eq!(
            pass_two,
            "header_files = [\n  'a.h',\n]\nsource_files = [\n  'x.cpp',\n]\nextra_files = []\n"
        );
        Ok(())
    }
}
