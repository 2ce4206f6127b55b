//! Core business logic module
//!
//! Collections, the build engine contract and the orchestration of a
//! build run. Filesystem access goes through [`crate::infra`].
//!
//! # Submodules
//!
//! - [`collection`] - Collections and asset kinds
//! - [`manifest`] - Manifest (assets.toml) parsing and validation
//! - [`registry`] - Collection lookup and enumeration
//! - [`options`] - Build run flags and per-dispatch requests
//! - [`engine`] - Build engine contract and output layout
//! - [`builder`] - Build orchestration and outcome classification
//! - [`clean`] - Production output cleanup
//! - [`compress`] - Gzip encoding
//! - [`report`] - Operator-facing report stream

pub mod builder;
pub mod clean;
pub mod collection;
pub mod compress;
pub mod engine;
pub mod manifest;
pub mod options;
pub mod registry;
pub mod report;
