//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a project with the sample manifest and its sources
    pub fn sample() -> Self {
        let project = Self::new();
        project.create_file("assets.toml", SAMPLE_MANIFEST);
        project.create_file("assets/css/reset.css", "* { margin: 0; }");
        project.create_file("assets/css/site.css", "body { color: #333; }");
        project.create_file("assets/js/app.js", "console.log('site');");
        project.create_file("assets/js/admin.js", "console.log('admin');");
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Remove a file from the test project
    pub fn remove_file(&self, name: &str) {
        std::fs::remove_file(self.dir.path().join(name)).expect("Failed to remove file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// File names directly inside a project directory, sorted
    pub fn list_dir(&self, name: &str) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.dir.path().join(name)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Run assetkit in the project directory
pub fn run_assetkit(project: &TestProject, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_assetkit"));
    cmd.current_dir(project.path());
    cmd.env_remove("ASSETKIT_CONFIG");
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute assetkit")
}

/// Run `assetkit build` in the project directory
pub fn run_build(project: &TestProject, args: &[&str]) -> Output {
    let mut full = vec!["build"];
    full.extend_from_slice(args);
    run_assetkit(project, &full)
}

/// Stdout of a finished command
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Sample manifest with two collections
pub const SAMPLE_MANIFEST: &str = r#"
[[collection]]
name = "site"
styles = ["assets/css/reset.css", "assets/css/site.css"]
scripts = ["assets/js/app.js"]

[[collection]]
name = "admin"
scripts = ["assets/js/admin.js"]
"#;
