//! Build command implementation
//!
//! Implements `assetkit build` to build one or all collections.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::OutputConfig;
use crate::core::builder::BuildOrchestrator;
use crate::core::engine::OutputLayout;
use crate::core::manifest::Manifest;
use crate::core::options::BuildConfig;
use crate::core::registry::Registry;
use crate::infra::engine::ConcatEngine;
use crate::infra::filesystem::LocalFileStore;

/// Build options
#[derive(Debug, Default)]
pub struct BuildOptions {
    /// Build only this collection
    pub collection: Option<String>,
    /// Production build
    pub production: bool,
    /// Gzip built assets
    pub gzip: bool,
    /// Rebuild even when up to date
    pub force: bool,
}

impl From<BuildOptions> for BuildConfig {
    fn from(options: BuildOptions) -> Self {
        BuildConfig::new()
            .production(options.production)
            .force(options.force)
            .compress(options.gzip)
            .target(options.collection)
    }
}

/// Execute the build command
pub fn execute(manifest_path: &Path, output: &OutputConfig, options: BuildOptions) -> Result<()> {
    let manifest = Manifest::load(manifest_path)
        .with_context(|| format!("Failed to load manifest {}", manifest_path.display()))?;
    let project_root = manifest_path.parent().unwrap_or_else(|| Path::new("."));

    tracing::info!(
        "Building from {} ({} collections)",
        manifest_path.display(),
        manifest.collections.len()
    );

    let registry = Registry::from(&manifest);
    let layout = OutputLayout::resolve(project_root, &manifest.output);
    let mut engine = ConcatEngine::new(project_root, layout);
    let mut reporter = output.reporter();
    let config = BuildConfig::from(options);

    let summary = BuildOrchestrator::new(&registry, &mut engine, &LocalFileStore, &mut reporter)
        .run(&config)
        .context("Build aborted")?;

    tracing::info!(
        "{} built, {} up to date",
        summary.built(),
        summary.skipped()
    );
    Ok(())
}
