//! Asset collections
//!
//! A collection is a named build unit holding ordered stylesheet and
//! script sources. Each collection produces at most one output file per
//! [`AssetKind`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The kind of asset a build step produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Stylesheets (`.css`)
    Style,
    /// Javascripts (`.js`)
    Script,
}

impl AssetKind {
    /// Every kind, in dispatch order
    pub const ALL: [AssetKind; 2] = [AssetKind::Style, AssetKind::Script];

    /// File extension of built output
    pub fn extension(self) -> &'static str {
        match self {
            Self::Style => "css",
            Self::Script => "js",
        }
    }

    /// Plural label used in console output
    pub fn label(self) -> &'static str {
        match self {
            Self::Style => "Stylesheets",
            Self::Script => "Javascripts",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style => f.write_str("style"),
            Self::Script => f.write_str("script"),
        }
    }
}

/// A named group of source files built together
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    /// Unique collection name
    pub name: String,

    /// Stylesheet sources, in concatenation order
    #[serde(default)]
    pub styles: Vec<PathBuf>,

    /// Script sources, in concatenation order
    #[serde(default)]
    pub scripts: Vec<PathBuf>,
}

impl Collection {
    /// Create an empty collection
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a stylesheet source
    #[must_use]
    pub fn with_style(mut self, path: impl Into<PathBuf>) -> Self {
        self.styles.push(path.into());
        self
    }

    /// Add a script source
    #[must_use]
    pub fn with_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.scripts.push(path.into());
        self
    }

    /// Sources of the given kind
    pub fn sources(&self, kind: AssetKind) -> &[PathBuf] {
        match kind {
            AssetKind::Style => &self.styles,
            AssetKind::Script => &self.scripts,
        }
    }
}
