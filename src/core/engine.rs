//! Build engine contract
//!
//! The engine turns one [`BuildRequest`] into output on disk. The
//! orchestrator only sees the [`RenderOutcome`]; how sources are combined
//! is up to the implementation (see [`crate::infra::engine::ConcatEngine`]).

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::core::collection::{AssetKind, Collection};
use crate::core::manifest::OutputSettings;
use crate::core::options::BuildRequest;
use crate::error::EngineError;

/// What the engine did with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Output was (re)generated at this path
    Rendered(PathBuf),
    /// Existing output is up to date
    NotRequired,
    /// Nothing was produced and no rebuild was needed
    Empty,
}

/// Builds collections, one asset kind at a time
pub trait BuildEngine {
    /// Build one (collection, kind) pair
    fn render(
        &mut self,
        collection: &Collection,
        request: &BuildRequest,
    ) -> Result<RenderOutcome, EngineError>;

    /// Where built output is written
    fn layout(&self) -> &OutputLayout;

    /// Whether this engine can gzip-encode output
    fn supports_compression(&self) -> bool;
}

/// Resolved output directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    /// Absolute public root
    pub public_dir: PathBuf,
    /// Stylesheet directory under the public root
    pub style_dir: String,
    /// Script directory under the public root
    pub script_dir: String,
}

impl OutputLayout {
    /// Resolve manifest output settings against the project root
    pub fn resolve(project_root: &Path, settings: &OutputSettings) -> Self {
        Self {
            public_dir: project_root.join(&settings.public_dir),
            style_dir: settings.style_dir.clone(),
            script_dir: settings.script_dir.clone(),
        }
    }

    /// Output directory for a kind
    pub fn dir_for(&self, kind: AssetKind) -> PathBuf {
        match kind {
            AssetKind::Style => self.public_dir.join(&self.style_dir),
            AssetKind::Script => self.public_dir.join(&self.script_dir),
        }
    }

    /// Glob matching every built file of a kind, one directory level deep
    pub fn output_glob(&self, kind: AssetKind) -> String {
        let dir = Pattern::escape(&self.dir_for(kind).to_string_lossy());
        format!("{dir}/*.{}", kind.extension())
    }
}
