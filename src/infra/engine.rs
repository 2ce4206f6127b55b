//! Concatenating build engine
//!
//! Joins a collection's sources in declaration order and writes one file
//! per asset kind. A SHA-256 fingerprint of the joined content and the
//! build flags is kept in a JSON state file so unchanged collections can
//! be skipped. Production output carries the fingerprint in its file
//! name (`site-0123456789ab.css`).

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::defaults::{FINGERPRINT_LEN, STATE_FILE};
use crate::core::collection::Collection;
use crate::core::compress;
use crate::core::engine::{BuildEngine, OutputLayout, RenderOutcome};
use crate::core::options::BuildRequest;
use crate::error::EngineError;
use crate::infra::filesystem;

/// Recorded result of a previous render
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateEntry {
    /// Fingerprint of the content and flags
    pub fingerprint: String,
    /// File that was written
    pub output: PathBuf,
}

/// Build state file, keyed by `<collection>.<ext>`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildState {
    /// Entries per output
    #[serde(default)]
    pub entries: BTreeMap<String, StateEntry>,
}

impl BuildState {
    /// Load the state file; a missing file is an empty state
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = filesystem::read_file(path)?;
        serde_json::from_str(&content).map_err(|e| EngineError::State {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Write the state file
    pub fn save(&self, path: &Path) -> Result<(), EngineError> {
        let content = serde_json::to_string_pretty(self).map_err(|e| EngineError::State {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        filesystem::write_file(path, content.as_bytes())?;
        Ok(())
    }
}

/// Engine that concatenates sources
#[derive(Debug)]
pub struct ConcatEngine {
    project_root: PathBuf,
    layout: OutputLayout,
    state_path: PathBuf,
    state: Option<BuildState>,
}

impl ConcatEngine {
    /// Create an engine for a project
    pub fn new(project_root: impl Into<PathBuf>, layout: OutputLayout) -> Self {
        let state_path = layout.public_dir.join(STATE_FILE);
        Self {
            project_root: project_root.into(),
            layout,
            state_path,
            state: None,
        }
    }

    /// Path of the build state file
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    fn state(&mut self) -> Result<&mut BuildState, EngineError> {
        if self.state.is_none() {
            self.state = Some(BuildState::load(&self.state_path)?);
        }
        Ok(self.state.get_or_insert_with(BuildState::default))
    }

    fn concat_sources(
        &self,
        collection: &Collection,
        sources: &[PathBuf],
    ) -> Result<String, EngineError> {
        let mut parts = Vec::with_capacity(sources.len());
        for source in sources {
            let path = self.project_root.join(source);
            if !path.is_file() {
                return Err(EngineError::SourceMissing {
                    collection: collection.name.clone(),
                    path,
                });
            }
            parts.push(filesystem::read_file(&path)?);
        }
        Ok(parts.join("\n"))
    }
}

/// Fingerprint of built content under the given flags
pub fn fingerprint(content: &str, request: &BuildRequest) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hasher.update([u8::from(request.production), u8::from(request.compress)]);
    hex::encode(hasher.finalize())
}

/// Output file name for a request
pub fn output_name(request: &BuildRequest, fingerprint: &str) -> String {
    let ext = request.kind.extension();
    if request.production {
        let short = &fingerprint[..FINGERPRINT_LEN.min(fingerprint.len())];
        format!("{}-{short}.{ext}", request.collection)
    } else {
        format!("{}.{ext}", request.collection)
    }
}

impl BuildEngine for ConcatEngine {
    fn render(
        &mut self,
        collection: &Collection,
        request: &BuildRequest,
    ) -> Result<RenderOutcome, EngineError> {
        let sources = collection.sources(request.kind);
        if sources.is_empty() {
            return Ok(RenderOutcome::Empty);
        }

        let content = self.concat_sources(collection, sources)?;
        let fingerprint = fingerprint(&content, request);
        let key = format!("{}.{}", collection.name, request.kind.extension());

        let output = self
            .layout
            .dir_for(request.kind)
            .join(output_name(request, &fingerprint));

        if !request.force {
            let fresh = self.state()?.entries.get(&key).is_some_and(|entry| {
                entry.fingerprint == fingerprint && entry.output == output && output.is_file()
            });
            if fresh {
                tracing::debug!("{key} is up to date");
                return Ok(RenderOutcome::NotRequired);
            }
        }

        let bytes = if request.compress {
            let (encoded, stats) = compress::gzip(content.as_bytes())
                .map_err(|e| EngineError::Compression { error: e.to_string() })?;
            tracing::info!(
                "Compressed {key}: {} -> {} bytes ({} bytes, {:.1}% saved)",
                stats.original_size,
                stats.compressed_size,
                stats.bytes_saved(),
                stats.ratio()
            );
            encoded
        } else {
            content.into_bytes()
        };

        filesystem::write_file(&output, &bytes)?;
        tracing::info!("Wrote {}", output.display());

        let state_path = self.state_path.clone();
        let state = self.state()?;
        state.entries.insert(
            key,
            StateEntry {
                fingerprint,
                output: output.clone(),
            },
        );
        state.save(&state_path)?;

        Ok(RenderOutcome::Rendered(output))
    }

    fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    fn supports_compression(&self) -> bool {
        compress::is_gzip_available()
    }
}
