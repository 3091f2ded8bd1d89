//! # Shibtools Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the shibtools CLI, the
//! developer tooling for the engine source tree. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each top-level command (`sync`, `gen`) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Regenerate the file lists of a module's meson.build
//! shibtools sync src/Modules/Graphics
//!
//! # Emit component boilerplate with increased verbosity
//! shibtools -vv gen component Camera
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the appropriate command handler
//! 4. Print a single diagnostic line and exit nonzero on any error
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Command logic (sync, gen).
mod common; // Shared utilities (filesystem I/O and scanning).
mod core; // Core infrastructure (errors, config, templating).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "shibtools",
    about = "Developer tooling for the engine tree: manifest sync & boilerplate generation",
    long_about = "Keeps meson.build source lists in sync with the files on disk and emits\n\
                  boilerplate header/source pairs for recurring engine class patterns.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "s")]
    Sync(commands::sync::SyncArgs),
    #[command(alias = "g")]
    Gen(commands::generate::GenArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Sync(args) => commands::sync::handle_sync(args),
        Commands::Gen(args) => commands::generate::handle_gen(args),
    };

    if let Err(e) = command_result {
        tracing::debug!("Command execution failed: {:?}", e);
        // `{:#}` keeps the diagnostic on one line while including the whole
        // context chain (e.g. which manifest and which section marker failed).
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
