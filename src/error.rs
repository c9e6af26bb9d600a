//! Typed error taxonomy for the scan and parse pipeline.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! The scanning core never lets an *expected* failure (missing file,
//! permission denied, oversized file) escape as a panic or an opaque error:
//! each one is captured as a [`ScanError`] carrying one of the five
//! categories in [`ScanErrorKind`]. Command handlers at the CLI boundary
//! convert everything else to [`anyhow::Error`] via the standard `?`
//! operator.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Category of a scan-level failure.
///
/// The taxonomy is exhaustive and flat: every failure that prevents a path
/// from yielding a configuration record maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanErrorKind {
    /// The file or directory could not be accessed.
    Permission,
    /// The path does not exist.
    NotFound,
    /// A format parser failed on the file's content.
    ParseError,
    /// The file exceeds the configured maximum size.
    SizeLimit,
    /// Anything that does not match the other categories.
    Unknown,
}

impl ScanErrorKind {
    /// Categorize an I/O error.
    ///
    /// Structured [`io::ErrorKind`] codes are preferred; the lowercased
    /// message is only sniffed for known substrings when the kind is
    /// uninformative. The sniffing fallback is a best-effort heuristic and
    /// not locale-portable.
    #[must_use]
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::Permission,
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::from_message(&err.to_string()),
        }
    }

    /// Categorize a failure from its lowercased message.
    #[must_use]
    pub fn from_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("permission denied") || lower.contains("access is denied") {
            Self::Permission
        } else if lower.contains("no such file") || lower.contains("not found") {
            Self::NotFound
        } else {
            Self::Unknown
        }
    }
}

/// A single failed path in a scan.
///
/// Exactly one `ScanError` is produced per top-level requested path that
/// failed to yield records; a path fails or succeeds, never both.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{}: {message}", path.display())]
pub struct ScanError {
    /// The offending path.
    pub path: PathBuf,
    /// Human-readable description of the failure.
    pub message: String,
    /// Failure category.
    pub kind: ScanErrorKind,
    /// Name of the underlying error (e.g. the [`io::ErrorKind`] debug form).
    pub raw: String,
}

impl ScanError {
    /// Build a `ScanError` from an I/O failure at `path`.
    #[must_use]
    pub fn from_io(path: &Path, err: &io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            message: err.to_string(),
            kind: ScanErrorKind::from_io(err),
            raw: format!("{:?}", err.kind()),
        }
    }

    /// Build a `SizeLimit` error for a file of `size` bytes over `limit`.
    #[must_use]
    pub fn size_limit(path: &Path, size: u64, limit: u64) -> Self {
        Self {
            path: path.to_path_buf(),
            message: format!("file size {size} exceeds limit of {limit} bytes"),
            kind: ScanErrorKind::SizeLimit,
            raw: "SizeLimit".to_string(),
        }
    }

    /// Build a `ParseError`-category error from a parser failure at `path`.
    #[must_use]
    pub fn parse(path: &Path, err: &ParseError) -> Self {
        Self {
            path: path.to_path_buf(),
            message: err.to_string(),
            kind: ScanErrorKind::ParseError,
            raw: "ParseError".to_string(),
        }
    }

    /// Build an `Unknown` error with a custom message.
    #[must_use]
    pub fn unknown(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            message: message.into(),
            kind: ScanErrorKind::Unknown,
            raw: "Unknown".to_string(),
        }
    }
}

/// A format parser failed on content it could not process at all.
///
/// Distinct from validation diagnostics: a [`ParseError`] means the parser
/// could not produce structured output, while validation errors describe
/// content the parser *did* process but judged syntactically wrong.
#[derive(Debug, Clone, Error)]
#[error("parse error: {message}")]
pub struct ParseError {
    /// Human-readable description of what the parser choked on.
    pub message: String,
}

impl ParseError {
    /// Create a new parse error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ParseError> for ScanErrorKind {
    fn from(_: ParseError) -> Self {
        Self::ParseError
    }
}
