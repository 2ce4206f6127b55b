//! Collection registry
//!
//! Read-only lookup and enumeration of the collections declared in the
//! manifest.

use crate::core::collection::Collection;
use crate::core::manifest::Manifest;

/// Lookup and enumeration of named collections
pub trait CollectionRegistry {
    /// Whether a collection with this name exists
    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up a collection by name
    fn get(&self, name: &str) -> Option<&Collection>;

    /// Every collection, in declaration order
    fn all(&self) -> &[Collection];
}

/// Registry backed by an ordered list of collections
#[derive(Debug, Clone, Default)]
pub struct Registry {
    collections: Vec<Collection>,
}

impl Registry {
    /// Create a registry from collections in build order
    pub fn new(collections: Vec<Collection>) -> Self {
        Self { collections }
    }

    /// Number of registered collections
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

impl From<&Manifest> for Registry {
    fn from(manifest: &Manifest) -> Self {
        Self::new(manifest.collections.clone())
    }
}

impl CollectionRegistry for Registry {
    fn get(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    fn all(&self) -> &[Collection] {
        &self.collections
    }
}
