// GitBrowse - Literate Browsing for Git Objects
// Copyright (C) 2025 GitBrowse Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

mod commands;
mod output;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use commands::*;
use gitbrowse_config::{Config, ConfigLoader, Validator};
use gitbrowse_observability::{init_tracing_with_config, LogConfig, LogFormat};
use session::Session;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitbrowse")]
#[command(version, about = "Browse git objects stored in a document database")]
#[command(
    long_about = "gitbrowse reads a git repository mirrored into CouchDB (or a JSON fixture)
and shows branches, trees and files. Source files are rendered as literate
documentation beside the code it describes."
)]
#[command(propagate_version = true)]
#[command(author = "GitBrowse Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (.toml, .yaml or .json)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CouchDB database URL
    #[arg(long, global = true, value_name = "URL", conflicts_with = "fixture")]
    store_url: Option<String>,

    /// JSON fixture file to browse instead of a database
    #[arg(long, global = true, value_name = "FILE")]
    fixture: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Colored output
    #[arg(long, global = true, value_name = "WHEN", value_parser = ["auto", "always", "never"])]
    color: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List branches
    Branches(BranchesCmd),

    /// Show the tree or file at a path of a branch
    Show(ShowCmd),

    /// Show a single stored document by id
    Object(ObjectCmd),

    /// Hexdump a local file
    Hexdump(HexdumpCmd),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let config = load_config(&cli).await?;
    apply_color(cli.color.as_deref().unwrap_or(&config.render.color));
    init_logging(&cli, &config)?;

    let session = Session::new(config);
    match cli.command {
        Commands::Branches(cmd) => cmd.execute(&session).await,
        Commands::Show(cmd) => cmd.execute(&session).await,
        Commands::Object(cmd) => cmd.execute(&session).await,
        Commands::Hexdump(cmd) => cmd.execute().await,
        Commands::Completions { .. } => Ok(()),
    }
}

/// Config file (or defaults), then `GITBROWSE_*` variables, then flags
async fn load_config(cli: &Cli) -> Result<Config> {
    let loader = ConfigLoader::without_validation();
    let mut config = match &cli.config {
        Some(path) => loader
            .load_with_overrides(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => loader
            .load_from_env()
            .context("Failed to read configuration from the environment")?,
    };

    if let Some(url) = &cli.store_url {
        config.store.url = Some(url.clone());
        config.store.fixture = None;
    }
    if let Some(fixture) = &cli.fixture {
        config.store.fixture = Some(fixture.clone());
        config.store.url = None;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => config.observability.log_level.as_str(),
            1 => "debug",
            _ => "trace",
        }
    };
    let format: LogFormat = config.observability.log_format.parse()?;

    let log_config = LogConfig::new()
        .with_format(format)
        .with_level(level)
        .with_color(console::colors_enabled_stderr())
        .with_targets(cli.verbose > 0);
    init_tracing_with_config(log_config).context("Failed to initialize logging")
}

fn apply_color(when: &str) {
    let enabled = match when {
        "always" => true,
        "never" => false,
        // auto: console detects per stream
        _ => return,
    };
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "gitbrowse", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_arguments_are_positional() {
        let cli = Cli::try_parse_from(["gitbrowse", "show", "dev", "head", "src/main.js", "--json"])
            .unwrap();
        match cli.command {
            Commands::Show(cmd) => {
                assert_eq!(cmd.branch.as_deref(), Some("dev"));
                assert_eq!(cmd.revision.as_deref(), Some("head"));
                assert_eq!(cmd.path.as_deref(), Some("src/main.js"));
                assert!(cmd.json);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_store_flags_conflict() {
        let parsed = Cli::try_parse_from([
            "gitbrowse",
            "--store-url",
            "http://localhost:5984/db",
            "--fixture",
            "repo.json",
            "branches",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["gitbrowse", "-vv", "branches"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["gitbrowse", "-q", "-v", "branches"]).is_err());
    }
}
