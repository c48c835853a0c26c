//! Common test utilities for textpatch integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory holding patch targets and literal files
pub struct TestWorkspace {
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
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

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Names of all entries directly under the workspace root, sorted
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.path)
            .expect("Failed to read workspace")
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real textpatch binary, run from the workspace root
pub fn textpatch_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_textpatch"));
    cmd.current_dir(&workspace.path);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Section of a YAML index document before expansion
pub const SCOPE_SECTION: &str = "    1.3_scope_management:\n      file: \"MANIFEST-SCOPE.md\"\n      sections:\n        - \"1.3.1 In-Scope Features\"\n        - \"1.3.2 Out-of-Scope Features\"\n";

/// The same section with its first entry expanded
pub const SCOPE_SECTION_EXPANDED: &str = "    1.3_scope_management:\n      file: \"MANIFEST-SCOPE.md\"\n      sections:\n        - title: \"1.3.1 In-Scope Features\"\n          breakdown:\n            - \"1.3.1.1 Platform orchestration\"\n            - \"1.3.1.2 Storage features\"\n        - \"1.3.2 Out-of-Scope Features\"\n";

/// A YAML index document containing [`SCOPE_SECTION`]
pub fn index_document(section: &str) -> String {
    format!("index:\n  manifest:\n{section}    1.4_next:\n      file: \"NEXT.md\"\n")
}

