// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{MonodetectConfig, OutputFormat};
use crate::error::{MonoError, Result, ResultExt};
use crate::monorepo::{self, MonorepoPackages, MonorepoReport};
use console::style;
use serde_json::json;

use super::args::{Cli, Commands, DetectArgs, DirArgs, InitArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = if let Some(config_path) = &cli.config {
        MonodetectConfig::load_from(config_path)?
    } else {
        MonodetectConfig::load()?
    };

    if !config.output.color {
        console::set_colors_enabled(false);
    }
    let format = cli.format.unwrap_or(config.output.format);

    match cli.effective_command() {
        Commands::Inspect(args) => run_inspect(format, args),
        Commands::Detect(args) => run_detect(format, &config, args),
        Commands::Like(args) => run_like(format, args),
        Commands::Packages(args) => run_packages(format, args),
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(args),
    }
}

/// Run the inspect command.
fn run_inspect(format: OutputFormat, args: DirArgs) -> Result<()> {
    tracing::debug!("Running inspect command with args: {:?}", args);

    let report = MonorepoReport::inspect(args.dir.as_deref())?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("{} {}", style("Root:").bold(), report.root.display());
            match report.tool {
                Some(tool) => println!("{} {}", style("Tool:").bold(), style(tool).green()),
                None => println!("{} {}", style("Tool:").bold(), style("none").dim()),
            }
            let layout = if report.looks_like {
                style("looks like a monorepo").green()
            } else {
                style("no packages/ or apps/ folder").dim()
            };
            println!("{} {}", style("Layout:").bold(), layout);
            println!(
                "{} {}",
                style("Packages:").bold(),
                report.packages.len()
            );
            print_packages_text(&report.packages, "  ");
        }
    }

    Ok(())
}

/// Run the detect command.
fn run_detect(format: OutputFormat, config: &MonodetectConfig, args: DetectArgs) -> Result<()> {
    tracing::debug!("Running detect command with args: {:?}", args);

    let dir = args.dir.as_deref();
    let tool = monorepo::is_monorepo(dir)?;
    let heuristic = args.heuristic || config.detect.heuristic;
    let looks_like = if tool.is_none() && heuristic {
        Some(monorepo::is_monorepo_like(dir)?)
    } else {
        None
    };

    match format {
        OutputFormat::Json => {
            let mut value = json!({ "tool": tool });
            if let Some(looks_like) = looks_like {
                value["looks_like"] = json!(looks_like);
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => match (tool, looks_like) {
            (Some(tool), _) => println!("{}", tool),
            (None, Some(true)) => println!("none {}", style("(looks like a monorepo)").dim()),
            (None, _) => println!("none"),
        },
    }

    Ok(())
}

/// Run the like command.
fn run_like(format: OutputFormat, args: DirArgs) -> Result<()> {
    tracing::debug!("Running like command with args: {:?}", args);

    let looks_like = monorepo::is_monorepo_like(args.dir.as_deref())?;

    match format {
        OutputFormat::Json => {
            let value = json!({ "looks_like": looks_like });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => println!("{}", looks_like),
    }

    Ok(())
}

/// Run the packages command.
fn run_packages(format: OutputFormat, args: DirArgs) -> Result<()> {
    tracing::debug!("Running packages command with args: {:?}", args);

    let packages = monorepo::get_monorepo_packages(args.dir.as_deref())?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&packages)?),
        OutputFormat::Text => print_packages_text(&packages, ""),
    }

    Ok(())
}

/// Print `name<TAB>path` lines.
fn print_packages_text(packages: &MonorepoPackages, indent: &str) {
    for (name, path) in packages {
        println!("{}{}\t{}", indent, style(name).cyan(), path);
    }
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("monodetect {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("monodetect.toml");

    if config_path.exists() && !args.force {
        return Err(MonoError::WithContext {
            context: "init".to_string(),
            message: "Configuration file already exists. Use --force to overwrite.".to_string(),
        });
    }

    std::fs::write(config_path, example_config()).context("init")?;

    println!("{} Created monodetect.toml", style("✓").green());

    Ok(())
}
