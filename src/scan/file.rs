//! Single-file scanning: stat, size check, read, classify.

use std::path::Path;

use chrono::{DateTime, Utc};

use super::classify::classify;
use super::fs::{EntryKind, ScanFs};
use super::options::ScanOptions;
use crate::error::ScanError;
use crate::model::{BackupStatus, ConfigurationRecord};

/// Scan one file into a configuration record.
///
/// Returns `Ok(Some(record))` for a classified file, `Ok(None)` for a file
/// that is not a configuration candidate (silently skipped, not a failure),
/// and `Err` for stat/read failures or an oversized file. The size limit is
/// enforced *before* reading: an oversized file's content is never touched.
///
/// # Errors
///
/// Returns a [`ScanError`] categorized from the underlying I/O error, or a
/// `SizeLimit` error when the file exceeds `options.max_file_size`.
pub fn scan_file(
    fs: &dyn ScanFs,
    path: &Path,
    options: &ScanOptions,
) -> Result<Option<ConfigurationRecord>, ScanError> {
    let info = fs.stat(path).map_err(|e| ScanError::from_io(path, &e))?;

    if info.kind != EntryKind::File {
        return Err(ScanError::unknown(path, "not a regular file"));
    }

    if info.len > options.max_file_size {
        return Err(ScanError::size_limit(path, info.len, options.max_file_size));
    }

    let content = fs
        .read_to_string(path)
        .map_err(|e| ScanError::from_io(path, &e))?;

    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        tracing::debug!(path = %path.display(), "skipping file with non-UTF-8 name");
        return Ok(None);
    };

    let Some(kind) = classify(file_name) else {
        tracing::debug!(path = %path.display(), "not a configuration candidate");
        return Ok(None);
    };

    Ok(Some(ConfigurationRecord {
        path: path.to_path_buf(),
        kind,
        content,
        last_modified: DateTime::<Utc>::from(info.modified),
        size: info.len,
        dependencies: Vec::new(),
        analysis: None,
        is_active: true,
        backup_status: BackupStatus::NotBackedUp,
    }))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ScanErrorKind;
    use crate::model::ConfigKind;
    use crate::scan::fs::MemoryScanFs;
    use std::path::PathBuf;

    fn opts() -> ScanOptions {
        ScanOptions::default()
    }

    #[test]
    fn classified_file_yields_record() {
        let fs = MemoryScanFs::new().with_file("/home/u/.bashrc", "export EDITOR=vim\n");
        let record = scan_file(&fs, Path::new("/home/u/.bashrc"), &opts())
            .unwrap()
            .expect("record expected");
        assert_eq!(record.kind, ConfigKind::Bash);
        assert_eq!(record.content, "export EDITOR=vim\n");
        assert_eq!(record.size, 18);
        assert!(record.is_active);
        assert_eq!(record.backup_status, BackupStatus::NotBackedUp);
        assert!(record.dependencies.is_empty());
        assert!(record.analysis.is_none());
    }

    #[test]
    fn unclassifiable_file_is_skipped_silently() {
        let fs = MemoryScanFs::new().with_file("/home/u/photo.png", "not really a png");
        let result = scan_file(&fs, Path::new("/home/u/photo.png"), &opts()).unwrap();
        assert!(result.is_none());
        // The skip is not free: the content was already read by then.
        assert_eq!(fs.reads(), 1);
    }

    #[test]
    fn missing_file_yields_not_found() {
        let fs = MemoryScanFs::new();
        let err = scan_file(&fs, Path::new("/nope/.bashrc"), &opts()).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::NotFound);
    }

    #[test]
    fn denied_file_yields_permission() {
        let fs = MemoryScanFs::new().with_denied("/root/.bashrc");
        let err = scan_file(&fs, Path::new("/root/.bashrc"), &opts()).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::Permission);
    }

    #[test]
    fn oversized_file_is_never_read() {
        let fs = MemoryScanFs::new().with_file("/home/u/.bashrc", "x".repeat(64));
        let options = ScanOptions {
            max_file_size: 16,
            ..ScanOptions::default()
        };
        let err = scan_file(&fs, Path::new("/home/u/.bashrc"), &options).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::SizeLimit);
        assert_eq!(fs.reads(), 0, "oversized file content must not be read");
    }

    #[test]
    fn file_at_exact_limit_is_read() {
        let fs = MemoryScanFs::new().with_file("/home/u/.bashrc", "x".repeat(16));
        let options = ScanOptions {
            max_file_size: 16,
            ..ScanOptions::default()
        };
        let record = scan_file(&fs, Path::new("/home/u/.bashrc"), &options).unwrap();
        assert!(record.is_some());
    }

    #[test]
    fn directory_is_not_a_regular_file() {
        let fs = MemoryScanFs::new().with_dir("/home/u", vec![PathBuf::from("/home/u/.bashrc")]);
        let err = scan_file(&fs, Path::new("/home/u"), &opts()).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::Unknown);
    }
}
