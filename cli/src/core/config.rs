//! # Shibtools Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for shibtools, handling
//! loading, merging, and validation of configuration data. Everything in the
//! configuration has a sensible default; the tool runs with no config file
//! present at all.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.shibtools.toml` in the current directory or ancestors
//! 2. User-specific config (`~/.config/shibtools/config.toml` on Linux)
//! 3. Default values defined in the code
//!
//! Two sections exist today:
//! - `[sync]`: additional file extensions folded into the default extension
//!   groups of `shibtools sync`.
//! - `[gen]`: directory names and default copyright owner used by
//!   `shibtools gen component` / `gen manager`.
//!
//! ## Examples
//!
//! ```toml
//! [sync]
//! header_extensions = ["hxx"]
//!
//! [gen]
//! components_dir = "src/Components"
//! copyright_owner = "Nicholas LaCroix"
//! ```
//!
use crate::core::error::{Result, ShibtoolsError};
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default, rename = "gen")]
    pub generate: GenConfig,
}

/// Configuration specific to the manifest synchronizer (`shibtools sync`).
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Extensions unioned into the default header group {h, hpp}.
    #[serde(default)]
    pub header_extensions: Vec<String>,
    /// Extensions unioned into the default source group {c, cc, cpp, cxx}.
    #[serde(default)]
    pub source_extensions: Vec<String>,
    /// Extensions unioned into the default extra-files group {inl, natvis}.
    #[serde(default)]
    pub extra_extensions: Vec<String>,
}

/// Configuration specific to the boilerplate generators (`shibtools gen`).
///
/// The directory fields stay `None` when a config file does not mention
/// them, so merging can tell "unset" apart from "explicitly set to the
/// default value". Callers go through the accessor methods, which apply the
/// engine-layout defaults.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GenConfig {
    /// Directory under the output root where component pairs are written.
    pub components_dir: Option<String>,
    /// Directory under the output root where manager pairs are written.
    pub managers_dir: Option<String>,
    /// Default copyright owner used for `--mit` banners when the flag value
    /// is omitted on the command line.
    pub copyright_owner: Option<String>,
}

impl GenConfig {
    pub const DEFAULT_COMPONENTS_DIR: &'static str = "src/Components";
    pub const DEFAULT_MANAGERS_DIR: &'static str = "src/Managers";

    /// The components directory, falling back to the engine default.
    pub fn components_dir(&self) -> &str {
        self.components_dir
            .as_deref()
            .unwrap_or(Self::DEFAULT_COMPONENTS_DIR)
    }

    /// The managers directory, falling back to the engine default.
    pub fn managers_dir(&self) -> &str {
        self.managers_dir
            .as_deref()
            .unwrap_or(Self::DEFAULT_MANAGERS_DIR)
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".shibtools.toml";

/// Loads the merged configuration (defaults ← user config ← project config).
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Shibboleth", "shibtools") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.shibtools.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from the current directory toward the filesystem root looking for a
/// project config file. Stops after a `.git` directory boundary is passed so
/// one project cannot pick up another project's settings.
fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").exists() {
            // Repository boundary. Do not search above it.
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => return Ok(None),
        }
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Merges a project config over a user config. Values the project config
/// leaves at their defaults fall through to the user config.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };

    let sync = SyncConfig {
        header_extensions: if project.sync.header_extensions.is_empty() {
            user.sync.header_extensions
        } else {
            project.sync.header_extensions
        },
        source_extensions: if project.sync.source_extensions.is_empty() {
            user.sync.source_extensions
        } else {
            project.sync.source_extensions
        },
        extra_extensions: if project.sync.extra_extensions.is_empty() {
            user.sync.extra_extensions
        } else {
            project.sync.extra_extensions
        },
    };

    let generate = GenConfig {
        components_dir: project
            .generate
            .components_dir
            .or(user.generate.components_dir),
        managers_dir: project.generate.managers_dir.or(user.generate.managers_dir),
        copyright_owner: project.generate.copyright_owner.or(user.generate.copyright_owner),
    };

    Config { sync, generate }
}

/// Rejects extension lists that would never match a scanned file name.
fn validate_config(config: &Config) -> Result<()> {
    let groups = [
        ("sync.header_extensions", &config.sync.header_extensions),
        ("sync.source_extensions", &config.sync.source_extensions),
        ("sync.extra_extensions", &config.sync.extra_extensions),
    ];
    for (field, extensions) in groups {
        for ext in extensions {
            if ext.is_empty() || ext.starts_with('.') || ext.contains('/') || ext.contains('\\') {
                anyhow::bail!(ShibtoolsError::Config(format!(
                    "{field}: '{ext}' is not a bare file extension (expected e.g. \"hpp\", not \".hpp\")"
                )));
            }
        }
    }
    Ok(())
}
