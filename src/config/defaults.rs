//! Default configuration values

/// Manifest file name looked up in the working directory
pub const MANIFEST_FILE: &str = "assets.toml";

/// Public output root, relative to the project
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Stylesheet output directory, relative to the public root
pub const DEFAULT_STYLE_DIR: &str = "css";

/// Script output directory, relative to the public root
pub const DEFAULT_SCRIPT_DIR: &str = "js";

/// Build state file kept in the public root
pub const STATE_FILE: &str = ".assetkit-state.json";

/// Number of fingerprint characters in production file names
pub const FINGERPRINT_LEN: usize = 12;

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
