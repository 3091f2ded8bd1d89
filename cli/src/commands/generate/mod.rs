//! # Shibtools Gen Command Group
//!
//! File: cli/src/commands/generate/mod.rs
//!
//! ## Overview
//!
//! This module serves as the entry point and router for the `shibtools gen`
//! command group. It defines the available subcommands (`component`,
//! `manager`) that emit boilerplate C++ header/source pairs for the two
//! recurring engine class patterns, and it hosts the helpers both generators
//! share: class-name validation, copyright banner resolution, and the
//! existence-checked pair write.
//!
//! ## Architecture
//!
//! - `GenArgs` / `GenCommand`: Clap derive structures routing to the
//!   subcommand handlers in `component.rs` and `manager.rs`.
//! - `resolve_banner`: turns `--copyright FILE` / `--mit [OWNER]` (plus the
//!   configured default owner) into the banner text prepended to both files.
//! - `write_pair`: refuses to overwrite existing files unless `--force` was
//!   given, checking both targets before writing either.
//!
//! ## Examples
//!
//! ```bash
//! # Emit Shibboleth_CameraComponent.h/.cpp under src/Components
//! shibtools gen component Camera --mit "Nicholas LaCroix"
//!
//! # Emit a manager pair into another tree, reusing the configured owner
//! shibtools gen manager Render --output ../engine --mit
//! ```
//!
use crate::common::fs::io;
use crate::core::config::GenConfig;
use crate::core::error::{Result, ShibtoolsError};
use crate::core::templating;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Contains the handler and arguments for `shibtools gen component`.
mod component;
/// Contains the handler and arguments for `shibtools gen manager`.
mod manager;

/// MIT license banner template; `{{ owner }}` and `{{ year }}` are filled in
/// at render time.
const MIT_LICENSE_TEMPLATE: &str = include_str!("../../../templates/mit_license.tera");

/// # Gen Command Group Arguments (`GenArgs`)
///
/// Represents the top-level command group `shibtools gen`, capturing which
/// boilerplate pattern the user wants to emit.
#[derive(Parser, Debug)]
pub struct GenArgs {
    #[command(subcommand)]
    command: GenCommand,
}

/// The set of valid subcommands following `shibtools gen`.
#[derive(Subcommand, Debug)]
enum GenCommand {
    /// Generate a Shibboleth_<NAME>Component.h/.cpp pair.
    Component(component::ComponentArgs),
    /// Generate a Shibboleth_<NAME>Manager.h/.cpp pair.
    Manager(manager::ManagerArgs),
}

/// Routes `shibtools gen <subcommand>` to the matching handler.
pub fn handle_gen(args: GenArgs) -> Result<()> {
    match args.command {
        GenCommand::Component(args) => component::handle_component(args)?,
        GenCommand::Manager(args) => manager::handle_manager(args)?,
    }
    Ok(())
}

/// Validates a class name fragment before any file is written.
///
/// Accepted names are non-empty, ASCII alphanumeric, and do not start with a
/// digit (e.g. `Camera`, `StateMachine`). The fragment is substituted into
/// both the class identifier and the generated file names.
pub(crate) fn validate_class_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric())
        }
        None => false,
    };
    if !valid {
        anyhow::bail!(ShibtoolsError::InvalidClassName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Resolves the copyright banner prepended to generated files.
///
/// An explicit `--copyright FILE` wins over `--mit`; with neither flag the
/// banner is empty and the
/// templates skip it entirely. `--mit` without a value falls back to the
/// configured `gen.copyright_owner`.
pub(crate) fn resolve_banner(
    mit: Option<&Option<String>>,
    copyright: Option<&Path>,
    cfg: &GenConfig,
) -> Result<String> {
    if let Some(path) = copyright {
        let text = io::read_file_to_string(path)?;
        return Ok(text.trim_end().to_string());
    }

    if let Some(owner_arg) = mit {
        let owner = owner_arg
            .as_deref()
            .or(cfg.copyright_owner.as_deref())
            .ok_or_else(|| {
                ShibtoolsError::Config(
                    "--mit was given without an owner and no 'gen.copyright_owner' is configured."
                        .to_string(),
                )
            })?;
        let mut context = HashMap::new();
        context.insert("owner".to_string(), owner.to_string());
        context.insert("year".to_string(), chrono::Local::now().year().to_string());
        return templating::render_str(MIT_LICENSE_TEMPLATE, &context);
    }

    Ok(String::new())
}

/// Renders one boilerplate template with the shared `name`/`banner` context.
pub(crate) fn render_boilerplate(template: &str, name: &str, banner: &str) -> Result<String> {
    let mut context = HashMap::new();
    context.insert("name".to_string(), name.to_string());
    context.insert("banner".to_string(), banner.to_string());
    templating::render_str(template, &context)
}

/// Writes the rendered header/source pair.
///
/// Both target paths are checked for collisions before either file is
/// written, so without `--force` an existing file aborts the command with
/// nothing emitted.
pub(crate) fn write_pair(
    header: (&Path, &str),
    source: (&Path, &str),
    force: bool,
) -> Result<()> {
    if !force {
        for path in [header.0, source.0] {
            if path.exists() {
                anyhow::bail!(ShibtoolsError::FileSystem(format!(
                    "'{}' already exists. Pass --force to overwrite.",
                    path.display()
                )));
            }
        }
    }

    io::write_string_to_file(header.0, header.1)?;
    io::write_string_to_file(source.0, source.1)?;
    debug!(
        "Generated pair: {} / {}",
        header.0.display(),
        source.0.display()
    );
    Ok(())
}
