//! Assetkit - asset collection builder
//!
//! Builds named collections of stylesheets and scripts into one output
//! file per collection and asset kind, with production cleanup and
//! optional gzip encoding.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Collections, build orchestration and outcome handling
//! - [`infra`] - Infrastructure layer (filesystem, the concatenating engine)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
