//! Command handlers for the CLI subcommands.

pub mod analyze;
pub mod scan;

use anyhow::Result;

use crate::cli::ScanOpts;
use crate::scan::{ScanOptions, ScanResult};

/// Translate parsed CLI flags into scanner options.
///
/// An empty `--path` list means "use the default dotfile locations", which
/// the scanner expresses as `None`.
fn to_scan_options(opts: &ScanOpts) -> ScanOptions {
    let mut options = ScanOptions {
        include_hidden: opts.include_hidden,
        exclude_patterns: opts.exclude.clone(),
        ..ScanOptions::default()
    };
    if !opts.paths.is_empty() {
        options.paths = Some(opts.paths.clone());
    }
    if let Some(limit) = opts.max_file_size {
        options.max_file_size = limit;
    }
    options
}

/// Emit a scan result: pretty JSON on stdout, or a human report via tracing.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
fn emit(result: &ScanResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    for record in &result.configs {
        tracing::info!(
            "{} [{}] {} bytes",
            record.path.display(),
            record.kind,
            record.size
        );
    }
    for error in &result.errors {
        tracing::warn!("{error}");
    }
    tracing::info!(
        "{} config(s) from {} path(s) in {:.1?}, {} error(s)",
        result.metadata.valid_configs,
        result.metadata.total_files,
        result.metadata.duration,
        result.errors.len()
    );
    Ok(())
}
