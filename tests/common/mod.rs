//! Common test utilities for portal-bundle integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the page the binary writes
pub const OUTPUT_FILE: &str = "file-transfer.html";

/// A scratch asset directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new, empty test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write raw bytes to a file in workspace
    #[allow(dead_code)]
    pub fn write_bytes(&self, path: &str, content: &[u8]) {
        std::fs::write(self.path.join(path), content).expect("Failed to write file");
    }

    /// Write all three assets at the workspace root
    #[allow(dead_code)]
    pub fn write_assets(&self, markup: &str, style: &str, script: &str) {
        self.write_file("index.html", markup);
        self.write_file("index.css", style);
        self.write_file("index.js", script);
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Copy a fixture asset directory into the workspace root
    #[allow(dead_code)]
    pub fn copy_fixture(&self, fixture_name: &str) {
        let fixture_path = fixture_dir(fixture_name);
        for name in ["index.html", "index.css", "index.js"] {
            std::fs::copy(fixture_path.join(name), self.path.join(name))
                .expect("Failed to copy fixture asset");
        }
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to a fixture directory under tests/common/fixtures
pub fn fixture_dir(fixture_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(fixture_name)
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn portal_bundle_cmd() -> Command {
    let mut cmd = Command::cargo_bin("portal-bundle").expect("Failed to find portal-bundle binary");
    cmd.env_remove("PORTAL_BUNDLE_LOG");
    cmd
}

/// Command running in `path`, the way the tool is normally invoked
pub fn portal_bundle_cmd_in(path: &Path) -> Command {
    let mut cmd = portal_bundle_cmd();
    cmd.current_dir(path);
    cmd
}
