// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed fake home directory and a fluent
// builder so each integration test can set up an isolated dotfile tree
// without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use dotscan_cli::scan::{ScanOptions, ScanResult, Scanner};

/// An isolated dotfile tree backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped (via the underlying
/// [`tempfile::TempDir`]).
pub struct TestHome {
    /// Temporary directory standing in for the user's home.
    pub root: tempfile::TempDir,
}

impl TestHome {
    /// Create a new empty test home.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path to the test home root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path of `name` inside the test home.
    pub fn file(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Write `content` to `name` inside the test home, creating parent
    /// directories as needed, and return its absolute path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.file(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write test file");
        path
    }

    /// Scan the given paths (relative to the test home) against the real
    /// filesystem with default options plus `include_hidden`.
    pub fn scan(&self, names: &[&str]) -> ScanResult {
        let paths = names
            .iter()
            .map(|n| self.file(n).to_string_lossy().into_owned())
            .collect();
        let options = ScanOptions {
            paths: Some(paths),
            include_hidden: true,
            ..ScanOptions::default()
        };
        Scanner::new().scan(&options)
    }

    /// Scan with fully caller-controlled options.
    pub fn scan_with(&self, options: &ScanOptions) -> ScanResult {
        Scanner::new().scan(options)
    }
}

/// Fluent builder over [`TestHome`] for tests that want their fixture tree
/// declared up front.
pub struct TestHomeBuilder {
    home: TestHome,
}

impl TestHomeBuilder {
    pub fn new() -> Self {
        Self {
            home: TestHome::new(),
        }
    }

    /// Add a file with the given content.
    #[must_use]
    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.home.write(name, content);
        self
    }

    /// Add an empty directory.
    #[must_use]
    pub fn with_dir(self, name: &str) -> Self {
        std::fs::create_dir_all(self.home.file(name)).expect("create dir");
        self
    }

    pub fn build(self) -> TestHome {
        self.home
    }
}
