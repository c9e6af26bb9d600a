//! Dotfile discovery: path resolution, classification, and the scan
//! orchestrator.
//!
//! The pipeline is built from small leaves — [`resolve`], [`classify`],
//! [`ExcludeMatcher`] — composed by the file scanner and directory walker,
//! all driven by [`Scanner::scan`], which turns a [`ScanOptions`] into one
//! [`ScanResult`] without ever propagating an expected failure.

mod classify;
mod exclude;
mod file;
pub mod fs;
mod options;
mod resolve;
mod walk;

pub use classify::classify;
pub use exclude::ExcludeMatcher;
pub use file::scan_file;
pub use options::{DEFAULT_MAX_FILE_SIZE, DEFAULT_SCAN_PATHS, ScanOptions};
pub use resolve::resolve;
pub use walk::walk_directory;

use std::time::Instant;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::ScanError;
use crate::model::ConfigurationRecord;
use fs::{EntryKind, ScanFs, SystemScanFs};

/// Derived bookkeeping for one scan call.
#[derive(Debug, Clone, Serialize)]
pub struct ScanMetadata {
    /// Number of top-level requested paths (not files found by recursion).
    pub total_files: usize,
    /// Number of configuration records produced.
    pub valid_configs: usize,
    /// Wall-clock time for the whole call.
    pub duration: std::time::Duration,
    /// When the scan started.
    pub started_at: DateTime<Utc>,
    /// When the scan finished.
    pub finished_at: DateTime<Utc>,
}

/// Everything a scan call produces: records, metadata, and per-path errors.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Successfully scanned configuration records, flattened across paths.
    pub configs: Vec<ConfigurationRecord>,
    /// Scan bookkeeping.
    pub metadata: ScanMetadata,
    /// At most one error per failed top-level requested path.
    pub errors: Vec<ScanError>,
}

/// Scan orchestrator.
///
/// Holds the filesystem seam and dispatches each requested path to the file
/// scanner or directory walker. Construct once and reuse; the scanner is
/// stateless between calls.
#[derive(Debug)]
pub struct Scanner {
    fs: Box<dyn ScanFs>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Create a scanner backed by the real filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fs: Box::new(SystemScanFs),
        }
    }

    /// Create a scanner backed by an injected filesystem (for tests).
    #[must_use]
    pub fn with_fs(fs: Box<dyn ScanFs>) -> Self {
        Self { fs }
    }

    /// Run one scan.
    ///
    /// Every expected failure becomes data: a failed path contributes one
    /// [`ScanError`] and zero records, and never aborts the batch. Top-level
    /// paths are independent, so they are scanned in parallel; the result
    /// lists preserve the requested path order.
    #[must_use]
    pub fn scan(&self, options: &ScanOptions) -> ScanResult {
        let started = Instant::now();
        let started_at = Utc::now();

        let paths = options.effective_paths();
        let matcher = ExcludeMatcher::new(&options.exclude_patterns);

        let outcomes: Vec<PathOutcome> = paths
            .par_iter()
            .map(|path| self.scan_path(path, options, &matcher))
            .collect();

        let mut configs = Vec::new();
        let mut errors = Vec::new();
        for outcome in outcomes {
            configs.extend(outcome.records);
            errors.extend(outcome.error);
        }

        let finished_at = Utc::now();
        let metadata = ScanMetadata {
            total_files: paths.len(),
            valid_configs: configs.len(),
            duration: started.elapsed(),
            started_at,
            finished_at,
        };

        tracing::debug!(
            total = metadata.total_files,
            valid = metadata.valid_configs,
            errors = errors.len(),
            "scan finished"
        );

        ScanResult {
            configs,
            metadata,
            errors,
        }
    }

    /// Scan one top-level requested path.
    fn scan_path(&self, path: &str, options: &ScanOptions, matcher: &ExcludeMatcher) -> PathOutcome {
        let resolved = resolve(path);

        let info = match self.fs.stat(&resolved) {
            Ok(info) => info,
            Err(e) => return PathOutcome::failed(ScanError::from_io(&resolved, &e)),
        };

        match info.kind {
            EntryKind::File => match scan_file(self.fs.as_ref(), &resolved, options) {
                Ok(Some(record)) => PathOutcome::records(vec![record]),
                Ok(None) => PathOutcome::records(Vec::new()),
                Err(e) => PathOutcome::failed(e),
            },
            EntryKind::Directory => {
                match walk_directory(self.fs.as_ref(), &resolved, options, matcher) {
                    Ok(records) => PathOutcome::records(records),
                    Err(e) => PathOutcome::failed(e),
                }
            }
            EntryKind::Other => {
                PathOutcome::failed(ScanError::unknown(&resolved, "not a file or directory"))
            }
        }
    }
}

/// Result of scanning one requested path: records or a single error.
struct PathOutcome {
    records: Vec<ConfigurationRecord>,
    error: Option<ScanError>,
}

impl PathOutcome {
    const fn records(records: Vec<ConfigurationRecord>) -> Self {
        Self {
            records,
            error: None,
        }
    }

    const fn failed(error: ScanError) -> Self {
        Self {
            records: Vec::new(),
            error: Some(error),
        }
    }
}
