// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use crate::config::OutputFormat;

/// monodetect - Monorepo detection
///
/// Detect whether a directory is a monorepo root, which tool it uses,
/// and which packages it declares.
#[derive(Parser, Debug)]
#[command(name = "monodetect")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Detect monorepo roots and list their packages", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to inspect if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format (overrides the configuration file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Full report: tool, layout heuristic and packages (default command)
    Inspect(DirArgs),

    /// Print the monorepo tool in use, or "none"
    Detect(DetectArgs),

    /// Check whether the folder layout looks like a monorepo
    Like(DirArgs),

    /// List workspace packages
    Packages(DirArgs),

    /// Print version information
    Version,

    /// Write an example monodetect.toml
    Init(InitArgs),
}

/// Arguments for commands that take only a directory.
#[derive(Parser, Debug, Default, Clone)]
pub struct DirArgs {
    /// Directory to inspect (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Arguments for the detect command.
#[derive(Parser, Debug, Default, Clone)]
pub struct DetectArgs {
    /// Directory to inspect (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Fall back to the packages/ and apps/ folder heuristic
    #[arg(long)]
    pub heuristic: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Inspect if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Inspect(DirArgs::default()))
    }
}
