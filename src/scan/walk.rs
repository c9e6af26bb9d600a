//! Recursive directory traversal with hidden-file and exclusion policy.

use std::path::{Path, PathBuf};

use super::exclude::ExcludeMatcher;
use super::file::scan_file;
use super::fs::{EntryKind, ScanFs};
use super::options::ScanOptions;
use crate::error::ScanError;
use crate::model::ConfigurationRecord;

/// Recursively scan a directory for configuration files.
///
/// Traversal is iterative with an explicit stack, so arbitrarily deep trees
/// cannot overflow the call stack. Per entry:
///
/// - hidden names (leading `.`) are skipped unless `options.include_hidden`;
/// - paths matching `matcher` are skipped;
/// - entries that cannot be stat'ed (dangling symlinks, files deleted
///   mid-walk) are dropped (logged at debug);
/// - files are delegated to the file scanner — individual scan failures are
///   dropped the same way, only successful records are kept;
/// - subdirectories are pushed and traversed in turn.
///
/// Symlinks follow the host filesystem's native stat semantics; cyclic link
/// structures are not special-cased.
///
/// # Errors
///
/// A `read_dir` failure on any directory in the subtree propagates as a
/// single [`ScanError`] for the whole walk; per-entry failures are
/// accumulated silently.
pub fn walk_directory(
    fs: &dyn ScanFs,
    dir: &Path,
    options: &ScanOptions,
    matcher: &ExcludeMatcher,
) -> Result<Vec<ConfigurationRecord>, ScanError> {
    let mut records = Vec::new();
    let mut stack: Vec<PathBuf> = vec![dir.to_path_buf()];

    while let Some(current) = stack.pop() {
        let entries = fs
            .read_dir(&current)
            .map_err(|e| ScanError::from_io(&current, &e))?;

        for entry in entries {
            if is_hidden(&entry) && !options.include_hidden {
                continue;
            }
            if matcher.is_excluded(&entry.to_string_lossy()) {
                tracing::debug!(path = %entry.display(), "excluded by pattern");
                continue;
            }

            // Entries can vanish or dangle (deleted mid-walk, broken
            // symlink); a stat failure on an entry is per-entry noise, not
            // a directory-level failure.
            let info = match fs.stat(&entry) {
                Ok(info) => info,
                Err(e) => {
                    tracing::debug!(path = %entry.display(), error = %e, "dropping unstatable entry");
                    continue;
                }
            };

            match info.kind {
                EntryKind::File => match scan_file(fs, &entry, options) {
                    Ok(Some(record)) => records.push(record),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::debug!(path = %entry.display(), error = %e, "dropping per-file scan error");
                    }
                },
                EntryKind::Directory => stack.push(entry),
                EntryKind::Other => {
                    tracing::debug!(path = %entry.display(), "skipping special file");
                }
            }
        }
    }

    Ok(records)
}

/// Whether the final path component starts with the hidden-file marker.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
