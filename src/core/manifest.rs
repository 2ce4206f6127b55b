//! Manifest (assets.toml) parsing and validation
//!
//! The manifest declares the output layout and the ordered list of
//! collections. Collection order in the file is the build order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Component, Path};

use crate::config::defaults::{DEFAULT_PUBLIC_DIR, DEFAULT_SCRIPT_DIR, DEFAULT_STYLE_DIR};
use crate::core::collection::Collection;
use crate::error::ManifestError;

/// The project manifest (assets.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Output layout
    #[serde(default)]
    pub output: OutputSettings,

    /// Collections, in build order
    #[serde(default, rename = "collection")]
    pub collections: Vec<Collection>,
}

/// `[output]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputSettings {
    /// Public root, relative to the project
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// Stylesheet directory under the public root
    #[serde(default = "default_style_dir")]
    pub style_dir: String,

    /// Script directory under the public root
    #[serde(default = "default_script_dir")]
    pub script_dir: String,
}

fn default_public_dir() -> String {
    DEFAULT_PUBLIC_DIR.to_string()
}

fn default_style_dir() -> String {
    DEFAULT_STYLE_DIR.to_string()
}

fn default_script_dir() -> String {
    DEFAULT_SCRIPT_DIR.to_string()
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            style_dir: default_style_dir(),
            script_dir: default_script_dir(),
        }
    }
}

impl Manifest {
    /// Parse and validate a manifest from TOML
    pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
        let manifest: Self =
            toml::from_str(content).map_err(|e| ManifestError::Parse(e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load a manifest from disk
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Check collection names are non-empty and unique
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut seen = HashSet::new();
        for (index, collection) in self.collections.iter().enumerate() {
            if collection.name.trim().is_empty() {
                return Err(ManifestError::EmptyName { index });
            }
            if !is_file_stem(&collection.name) {
                return Err(ManifestError::InvalidName {
                    name: collection.name.clone(),
                });
            }
            if !seen.insert(collection.name.as_str()) {
                return Err(ManifestError::DuplicateCollection {
                    name: collection.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Whether a collection name is a single plain path component
///
/// Output files are named after collections, so names must stay inside
/// the output directory that production cleanup scans.
fn is_file_stem(name: &str) -> bool {
    if name.contains(['/', '\\']) || name.contains("..") {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
