//! Shared testing utilities for dgraph-helper CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Create a writable stand-in for the systemd unit directory.
    pub fn service_dir(&self) -> PathBuf {
        let dir = self.root.path().join("systemd");
        fs::create_dir_all(&dir).expect("Failed to create service directory");
        dir
    }

    /// Build a command for invoking the compiled `dgraph-helper` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("dgraph-helper").expect("Failed to locate dgraph-helper binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.home()).env_remove("DGRAPH_HELPER_LOG");
        cmd
    }
}
