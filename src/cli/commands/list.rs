//! List command implementation
//!
//! Implements `assetkit list` to show the collections a build would cover.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::OutputConfig;
use crate::core::collection::{AssetKind, Collection};
use crate::core::manifest::Manifest;
use crate::core::registry::{CollectionRegistry, Registry};

/// One-line description of a collection
pub fn describe(collection: &Collection) -> String {
    format!(
        "{} ({} stylesheet(s), {} script(s))",
        collection.name,
        collection.sources(AssetKind::Style).len(),
        collection.sources(AssetKind::Script).len()
    )
}

/// Execute the list command
pub fn execute(manifest_path: &Path, output: &OutputConfig) -> Result<()> {
    let manifest = Manifest::load(manifest_path)
        .with_context(|| format!("Failed to load manifest {}", manifest_path.display()))?;
    let registry = Registry::from(&manifest);

    if output.quiet {
        return Ok(());
    }

    if registry.is_empty() {
        println!("No collections defined in {}", manifest_path.display());
        return Ok(());
    }

    println!("Collections:");
    for collection in registry.all() {
        println!("  {}", describe(collection));
    }
    Ok(())
}
