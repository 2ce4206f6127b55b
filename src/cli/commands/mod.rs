//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod list;

use anyhow::Result;
use clap::Subcommand;
use std::path::Path;

use crate::cli::output::OutputConfig;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build asset collections
    Build {
        /// The asset collection to build (builds all if not specified)
        collection: Option<String>,

        /// Build assets for a production environment
        #[arg(short, long)]
        production: bool,

        /// Gzip built assets
        #[arg(long)]
        gzip: bool,

        /// Forces a re-build of the collection
        #[arg(short, long)]
        force: bool,
    },

    /// List configured collections
    List,
}

impl Commands {
    /// Execute the command
    pub fn run(self, manifest_path: &Path, output: &OutputConfig) -> Result<()> {
        match self {
            Self::Build {
                collection,
                production,
                gzip,
                force,
            } => {
                let options = build::BuildOptions {
                    collection,
                    production,
                    gzip,
                    force,
                };
                build::execute(manifest_path, output, options)
            }
            Self::List => list::execute(manifest_path, output),
        }
    }
}
