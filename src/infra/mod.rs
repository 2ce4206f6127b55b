//! Infrastructure layer
//!
//! Filesystem access and the concatenating build engine. This module is
//! the only place where side effects occur.

pub mod engine;
pub mod filesystem;
