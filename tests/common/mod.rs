//! Common test utilities for fixnotes integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of fix notes
#[allow(dead_code)]
pub struct FixesDir {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the fixes directory
    pub path: PathBuf,
}

#[allow(dead_code)]
impl FixesDir {
    /// Create an empty fixes directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a fixes directory holding a `### <version>` note for each version
    pub fn with_versions(versions: &[&str]) -> Self {
        let dir = Self::new();
        for version in versions {
            dir.write_file(&format!("{version}.md"), &note_for(version));
        }
        dir
    }

    /// Write a file in the fixes directory
    pub fn write_file(&self, name: &str, content: &str) {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }
}

/// Content written for a version by [`FixesDir::with_versions`]
#[allow(dead_code)]
pub fn note_for(version: &str) -> String {
    format!("### Hugo {version}\n\n- Fix for {version}.\n")
}

/// Command for the real fixnotes binary with a clean environment
#[allow(deprecated)]
pub fn fixnotes_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fixnotes").expect("Failed to find fixnotes binary");
    cmd.env_remove("FIXNOTES_DIR");
    cmd
}

/// Command reading fix notes from `dir`
#[allow(dead_code)]
pub fn fixnotes_cmd_for_dir(dir: &Path) -> Command {
    let mut cmd = fixnotes_cmd();
    cmd.arg("--fixes-dir").arg(dir);
    cmd
}
