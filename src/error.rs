//! Error types for assetkit
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::collection::AssetKind;

/// Manifest (assets.toml) errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("Manifest not found at '{path}'. Create an assets.toml describing your collections.")]
    NotFound { path: PathBuf },

    /// Failed to read the manifest
    #[error("Failed to read manifest '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Invalid TOML or schema
    #[error("Failed to parse manifest: {0}")]
    Parse(String),

    /// Collection declared without a name
    #[error("Collection #{index} has an empty name")]
    EmptyName { index: usize },

    /// Collection name is not usable as a file name
    #[error("Collection name '{name}' must be a single file name (no '/', '\\' or '..')")]
    InvalidName { name: String },

    /// Two collections share a name
    #[error("Collection '{name}' is declared more than once")]
    DuplicateCollection { name: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Glob pattern could not be compiled
    #[error("Invalid glob pattern '{pattern}': {error}")]
    InvalidPattern { pattern: String, error: String },
}

/// Build engine failures
///
/// "Nothing to rebuild" is not an error; it is reported through
/// [`crate::core::engine::RenderOutcome::NotRequired`].
#[derive(Error, Debug)]
pub enum EngineError {
    /// A configured source file does not exist
    #[error("Source '{path}' of collection '{collection}' does not exist")]
    SourceMissing { collection: String, path: PathBuf },

    /// Build state file is unreadable or unwritable
    #[error("Build state '{path}' is corrupt: {error}")]
    State { path: PathBuf, error: String },

    /// Compression was requested but failed
    #[error("Compression failed: {error}")]
    Compression { error: String },

    /// Filesystem error
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Errors that abort a build run
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// The build engine failed on a (collection, kind) pair
    #[error("Failed to build {kind} for collection '{collection}'")]
    Engine {
        collection: String,
        kind: AssetKind,
        #[source]
        source: EngineError,
    },

    /// Production cleanup could not delete stale output
    #[error("Failed to tidy production output")]
    Cleanup(#[source] FilesystemError),
}
