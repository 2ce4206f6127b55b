//! Build run options
//!
//! [`BuildConfig`] is resolved once from operator input and stays fixed
//! for the whole run. Every [`BuildRequest`] handed to the engine is
//! derived from it, so all dispatches in a run see the same flags.

use crate::core::collection::AssetKind;

/// Resolved flags for one build run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Production mode: tidy previous output and fingerprint file names
    pub production: bool,
    /// Rebuild even when output is up to date
    pub force: bool,
    /// Gzip-encode built output
    pub compress: bool,
    /// Build only this collection
    pub target: Option<String>,
}

impl BuildConfig {
    /// Create a development build of every collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable production mode
    #[must_use]
    pub fn production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    /// Force rebuilds
    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Request gzip output
    #[must_use]
    pub fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Restrict the run to one collection
    #[must_use]
    pub fn target(mut self, target: Option<String>) -> Self {
        self.target = target;
        self
    }

    /// Build request for one (collection, kind) pair
    pub fn request(&self, collection: &str, kind: AssetKind) -> BuildRequest {
        BuildRequest {
            collection: collection.to_string(),
            kind,
            production: self.production,
            force: self.force,
            compress: self.compress,
        }
    }
}

/// A single build step handed to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Collection name
    pub collection: String,
    /// Asset kind to build
    pub kind: AssetKind,
    /// Production mode
    pub production: bool,
    /// Skip the staleness check
    pub force: bool,
    /// Gzip-encode the output
    pub compress: bool,
}
