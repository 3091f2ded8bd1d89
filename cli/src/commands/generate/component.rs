//! # Shibtools Gen Component Command
//!
//! File: cli/src/commands/generate/component.rs
//!
//! ## Overview
//!
//! This module implements `shibtools gen component`, which emits the
//! boilerplate `Shibboleth_<Name>Component.h` / `.cpp` pair for a new engine
//! component: the reflection macros, `GetComponentName`, the schema accessor,
//! and the `load`/`save` skeletons.
//!
//! The header lands in `<output>/<components_dir>/include/`, the source in
//! `<output>/<components_dir>/`, matching the engine tree layout.
//!
//! ## Examples
//!
//! ```bash
//! shibtools gen component Camera --mit "Nicholas LaCroix"
//! shibtools gen component Audio --output ../engine --copyright NOTICE.txt
//! ```
//!
use super::{render_boilerplate, resolve_banner, validate_class_name, write_pair};
use crate::core::config;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

const HEADER_TEMPLATE: &str = include_str!("../../../templates/component_header.h.tera");
const SOURCE_TEMPLATE: &str = include_str!("../../../templates/component_source.cpp.tera");

/// # Gen Component Arguments (`ComponentArgs`)
///
/// Defines the command-line arguments accepted by `shibtools gen component`.
#[derive(Parser, Debug)]
pub struct ComponentArgs {
    /// Class name fragment; generates Shibboleth_<NAME>Component.h/.cpp.
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

/// Entry point for `shibtools gen component`: loads configuration, then
/// renders and writes the pair.
pub fn handle_component(args: ComponentArgs) -> Result<()> {
    let cfg = config::load_config()?;
    run_component(&args, &cfg)
}

/// Runs the generator with an explicit configuration. Split out from
/// `handle_component` so tests can supply a `Config` directly.
pub fn run_component(args: &ComponentArgs, cfg: &config::Config) -> Result<()> {
    validate_class_name(&args.name)?;
    let banner = resolve_banner(args.mit.as_ref(), args.copyright.as_deref(), &cfg.generate)?;

    let header_text = render_boilerplate(HEADER_TEMPLATE, &args.name, &banner)?;
    let source_text = render_boilerplate(SOURCE_TEMPLATE, &args.name, &banner)?;

    let components_root = args.output.join(cfg.generate.components_dir());
    let header_path = components_root
        .join("include")
        .join(format!("Shibboleth_{}Component.h", args.name));
    let source_path = components_root.join(format!("Shibboleth_{}Component.cpp", args.name));

    write_pair(
        (&header_path, &header_text),
        (&source_path, &source_text),
        args.force,
    )?;

    info!("Generated component '{}Component'", args.name);
    println!("Created: {}", header_path.display());
    println!("Created: {}", source_path.display());
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use std::fs;
    use tempfile::tempdir;

    fn component_args(extra: &[&str]) -> ComponentArgs {
        let mut argv = vec!["component", "Camera"];
        argv.extend_from_slice(extra);
        ComponentArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_generates_pair_under_components_dir() -> Result<()> {
        let dir = tempdir()?;
        let args = component_args(&["--output", dir.path().to_str().unwrap()]);
        run_component(&args, &Config::default())?;

        let header_path = dir
            .path()
            .join("src/Components/include/Shibboleth_CameraComponent.h");
        let source_path = dir.path().join("src/Components/Shibboleth_CameraComponent.cpp");
        assert!(header_path.is_file());
        assert!(source_path.is_file());

        let header = fs::read_to_string(&header_path)?;
        assert!(header.starts_with("#pragma once"));
        assert!(header.contains("class CameraComponent : public Component"));
        assert!(header.contains("SHIB_REF_DEF(CameraComponent);"));

        let source = fs::read_to_string(&source_path)?;
        assert!(source.starts_with("#include \"Shibboleth_CameraComponent.h\""));
        assert!(source.contains("return \"Camera Component\";"));
        assert!(source.contains("CameraComponent::getSchema(void) const"));
        assert!(source.contains("bool CameraComponent::save(Gaff::JSON& json)"));
        Ok(())
    }

    #[test]
    fn test_mit_banner_is_prepended_to_both_files() -> Result<()> {
        let dir = tempdir()?;
        let args = component_args(&[
            "--output",
            dir.path().to_str().unwrap(),
            "--mit",
            "Nicholas LaCroix",
        ]);
        run_component(&args, &Config::default())?;

        let header = fs::read_to_string(
            dir.path()
                .join("src/Components/include/Shibboleth_CameraComponent.h"),
        )?;
        let source = fs::read_to_string(
            dir.path().join("src/Components/Shibboleth_CameraComponent.cpp"),
        )?;
        for text in [&header, &source] {
            assert!(text.starts_with("/****"));
            assert!(text.contains("by Nicholas LaCroix"));
        }
        assert!(header.contains("\n\n#pragma once"));
        Ok(())
    }

    #[test]
    fn test_invalid_name_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut argv = vec!["component", "Bad Name"];
        let output = dir.path().to_str().unwrap().to_string();
        argv.extend_from_slice(&["--output", &output]);
        let args = ComponentArgs::try_parse_from(argv).unwrap();

        let result = run_component(&args, &Config::default());
        assert!(result.is_err());
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_existing_file_requires_force() -> Result<()> {
        let dir = tempdir()?;
        let args = component_args(&["--output", dir.path().to_str().unwrap()]);
        run_component(&args, &Config::default())?;

        // Second run without --force aborts.
        let result = run_component(&args, &Config::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));

        // With --force it succeeds.
        let forced = component_args(&["--output", dir.path().to_str().unwrap(), "--force"]);
        run_component(&forced, &Config::default())?;
        Ok(())
    }

    #[test]
    fn test_configured_components_dir_is_honored() -> Result<()> {
        let dir = tempdir()?;
        let cfg: Config = toml::from_str(
            r#"
            [gen]
            components_dir = "Engine/Comp"
        "#,
        )
        .unwrap();
        let args = component_args(&["--output", dir.path().to_str().unwrap()]);
        run_component(&args, &cfg)?;
        assert!(dir
            .path()
            .join("Engine/Comp/include/Shibboleth_CameraComponent.h")
            .is_file());
        Ok(())
    }
}
