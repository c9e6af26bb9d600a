//! Filesystem abstractions for dependency injection.
//!
//! Provides the [`ScanFs`] trait so the scanner can be unit-tested without
//! touching the real filesystem (and so tests can observe that oversized
//! files are never read). Production code uses [`SystemScanFs`]; tests use
//! the in-memory `MemoryScanFs`.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// What a path points at, after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// Anything else (device, socket, fifo, …).
    Other,
}

/// Stat result for a single path.
#[derive(Debug, Clone, Copy)]
pub struct EntryInfo {
    /// File, directory, or special.
    pub kind: EntryKind,
    /// Size in bytes (0 for directories on some platforms).
    pub len: u64,
    /// Last-modified time.
    pub modified: SystemTime,
}

/// Abstraction over the filesystem queries the scanner performs.
///
/// Implement this trait to swap in a test double, keeping scan logic
/// independent of real I/O. The production implementation is
/// [`SystemScanFs`].
pub trait ScanFs: Send + Sync + std::fmt::Debug {
    /// Stat `path`, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the path cannot be stat'ed.
    fn stat(&self, path: &Path) -> io::Result<EntryInfo>;

    /// Read the full content of the file at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Return the immediate child paths inside the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory cannot be read.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Production [`ScanFs`] implementation that delegates to [`std::fs`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemScanFs;

impl ScanFs for SystemScanFs {
    fn stat(&self, path: &Path) -> io::Result<EntryInfo> {
        let meta = std::fs::metadata(path)?;
        let kind = if meta.is_file() {
            EntryKind::File
        } else if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        };
        Ok(EntryInfo {
            kind,
            len: meta.len(),
            modified: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        })
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = std::fs::read_dir(path)?
            .map(|e| e.map(|entry| entry.path()))
            .collect::<io::Result<Vec<_>>>()?;
        // Deterministic order regardless of the host filesystem.
        entries.sort();
        Ok(entries)
    }
}

/// In-memory [`ScanFs`] for unit tests.
///
/// Pre-configure files and directories with the builder-style methods, then
/// hand the instance to the scanner. Every `read_to_string` call is counted
/// so tests can assert that oversized files are never read.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryScanFs {
    files: std::collections::HashMap<PathBuf, String>,
    dirs: std::collections::HashMap<PathBuf, Vec<PathBuf>>,
    denied: Vec<PathBuf>,
    unreadable: Vec<PathBuf>,
    unlistable: Vec<PathBuf>,
    read_count: std::sync::Mutex<usize>,
}

#[cfg(test)]
impl MemoryScanFs {
    /// Create an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a regular file with `content`.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Register a directory with the given child paths.
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>, entries: Vec<PathBuf>) -> Self {
        self.dirs.insert(path.into(), entries);
        self
    }

    /// Make every access to `path` fail with `PermissionDenied`.
    #[must_use]
    pub fn with_denied(mut self, path: impl Into<PathBuf>) -> Self {
        self.denied.push(path.into());
        self
    }

    /// Make only content reads of `path` fail with `PermissionDenied`;
    /// stat still succeeds. Models a file visible in a listing but not
    /// readable.
    #[must_use]
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>, len: u64) -> Self {
        let p = path.into();
        self.files.insert(p.clone(), "\0".repeat(usize::try_from(len).unwrap_or(0)));
        self.unreadable.push(p);
        self
    }

    /// Make only `read_dir` of `path` fail with `PermissionDenied`; stat
    /// still succeeds. Models a directory visible to its parent but not
    /// listable.
    #[must_use]
    pub fn with_unlistable(mut self, path: impl Into<PathBuf>) -> Self {
        let p = path.into();
        self.dirs.entry(p.clone()).or_default();
        self.unlistable.push(p);
        self
    }

    /// Number of `read_to_string` calls made so far.
    pub fn reads(&self) -> usize {
        *self
            .read_count
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
impl ScanFs for MemoryScanFs {
    fn stat(&self, path: &Path) -> io::Result<EntryInfo> {
        if self.denied.iter().any(|p| p == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        if let Some(content) = self.files.get(path) {
            return Ok(EntryInfo {
                kind: EntryKind::File,
                len: u64::try_from(content.len()).unwrap_or(u64::MAX),
                modified: SystemTime::UNIX_EPOCH,
            });
        }
        if self.dirs.contains_key(path) {
            return Ok(EntryInfo {
                kind: EntryKind::Directory,
                len: 0,
                modified: SystemTime::UNIX_EPOCH,
            });
        }
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no such file or directory",
        ))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let mut count = self
            .read_count
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *count += 1;
        drop(count);

        if self.denied.iter().any(|p| p == path) || self.unreadable.iter().any(|p| p == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file or directory"))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if self.denied.iter().any(|p| p == path) || self.unlistable.iter().any(|p| p == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file or directory"))
    }
}
