//! # Shibtools Gen Manager Command
//!
//! File: cli/src/commands/generate/manager.rs
//!
//! ## Overview
//!
//! This module implements `shibtools gen manager`, which emits the
//! boilerplate `Shibboleth_<Name>Manager.h` / `.cpp` pair for a new engine
//! manager: reflection macros, `GetFriendlyName`, and the `getName` override.
//!
//! The header lands in `<output>/<managers_dir>/include/`, the source in
//! `<output>/<managers_dir>/`, matching the engine tree layout.
//!
//! ## Examples
//!
//! ```bash
//! shibtools gen manager Render --mit "Nicholas LaCroix"
//! shibtools gen manager Input --output ../engine
//! ```
//!
use super::{render_boilerplate, resolve_banner, validate_class_name, write_pair};
use crate::core::config;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

const HEADER_TEMPLATE: &str = include_str!("../../../templates/manager_header.h.tera");
const SOURCE_TEMPLATE: &str = include_str!("../../../templates/manager_source.cpp.tera");

/// # Gen Manager Arguments (`ManagerArgs`)
///
/// Defines the command-line arguments accepted by `shibtools gen manager`.
#[derive(Parser, Debug)]
pub struct ManagerArgs {
    /// Class name fragment; generates Shibboleth_<NAME>Manager.h/.cpp.
    name: String,

    /// Prepend the MIT license banner. OWNER overrides the configured
    /// `gen.copyright_owner`.
    #[arg(long, value_name = "OWNER", num_args = 0..=1)]
    mit: Option<Option<String>>,

    /// File whose contents are prepended verbatim as the copyright banner.
    /// Takes precedence over --mit.
    #[arg(long, value_name = "FILE")]
    copyright: Option<PathBuf>,

    /// Engine source root the pair is written under.
    #[arg(long, short = 'o', default_value = ".")]
    output: PathBuf,

    /// Overwrite existing files instead of aborting.
    #[arg(long, short = 'f')]
    force: bool,
}

/// Entry point for `shibtools gen manager`: loads configuration, then
/// renders and writes the pair.
pub fn handle_manager(args: ManagerArgs) -> Result<()> {
    let cfg = config::load_config()?;
    run_manager(&args, &cfg)
}

/// Runs the generator with an explicit configuration. Split out from
/// `handle_manager` so tests can supply a `Config` directly.
pub fn run_manager(args: &ManagerArgs, cfg: &config::Config) -> Result<()> {
    validate_class_name(&args.name)?;
    let banner = resolve_banner(args.mit.as_ref(), args.copyright.as_deref(), &cfg.generate)?;

    let header_text = render_boilerplate(HEADER_TEMPLATE, &args.name, &banner)?;
    let source_text = render_boilerplate(SOURCE_TEMPLATE, &args.name, &banner)?;

    let managers_root = args.output.join(cfg.generate.managers_dir());
    let header_path = managers_root
        .join("include")
        .join(format!("Shibboleth_{}Manager.h", args.name));
    let source_path = managers_root.join(format!("Shibboleth_{}Manager.cpp", args.name));

    write_pair(
        (&header_path, &header_text),
        (&source_path, &source_text),
        args.force,
    )?;

    info!("Generated manager '{}Manager'", args.name);
    println!("Created: {}", header_path.display());
    println!("Created: {}", source_path.display());
    Ok(())
}
