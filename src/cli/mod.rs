//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults::MANIFEST_FILE;
use commands::Commands;
use output::OutputConfig;

/// Assetkit - asset collection builder
///
/// Build stylesheet and script collections declared in assets.toml.
#[derive(Parser, Debug)]
#[command(name = "assetkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the manifest (defaults to ./assets.toml)
    #[arg(short = 'C', long, global = true, env = "ASSETKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output settings requested on the command line
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.verbose)
    }

    /// Manifest path, relative paths resolved against the working directory
    pub fn manifest_path(&self) -> Result<PathBuf> {
        let current_dir = std::env::current_dir()?;
        Ok(match &self.config {
            Some(path) => current_dir.join(path),
            None => current_dir.join(MANIFEST_FILE),
        })
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = self.output_config();
        let manifest_path = self.manifest_path()?;
        if let Some(cmd) = self.command {
            cmd.run(&manifest_path, &output)
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
