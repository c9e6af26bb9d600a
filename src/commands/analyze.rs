//! The `analyze` subcommand: scan, then run the format-specific parsers
//! over everything found.

use anyhow::Result;
use serde_json::json;

use crate::cli::ScanOpts;
use crate::error::ScanError;
use crate::parsers::ParserRegistry;
use crate::scan::{ScanResult, Scanner};

/// Run the analyze command.
///
/// # Errors
///
/// Returns an error if the result cannot be serialized for output. Per-file
/// parse failures become entries in the result's error list.
pub fn run(opts: &ScanOpts) -> Result<()> {
    let options = super::to_scan_options(opts);
    let mut result = Scanner::new().scan(&options);
    analyze_records(&mut result, &ParserRegistry::new());
    super::emit(&result, opts.json)
}

/// Attach parser output to every record in place.
///
/// Each record gets its dependency list and an `analysis` payload holding
/// the structured parse and the summary. A record whose content defeats its
/// parser keeps its place in the list; the failure is appended to the
/// result's errors instead.
fn analyze_records(result: &mut ScanResult, registry: &ParserRegistry) {
    for record in &mut result.configs {
        let parser = registry.parser_for(record.kind);
        record.dependencies = parser.extract_dependencies(&record.content);

        match parser.parse(&record.content) {
            Ok(parsed) => {
                let summary = parser.summary(&record.content);
                record.analysis = Some(json!({
                    "summary": summary,
                    "parsed": parsed,
                }));
            }
            Err(e) => {
                tracing::debug!("parse failed for {}: {e}", record.path.display());
                result.errors.push(ScanError::parse(&record.path, &e));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::scan::{ScanOptions, Scanner, fs::MemoryScanFs};

    fn scan(fs: MemoryScanFs, paths: &[&str]) -> ScanResult {
        let options = ScanOptions {
            paths: Some(paths.iter().map(ToString::to_string).collect()),
            ..ScanOptions::default()
        };
        Scanner::with_fs(Box::new(fs)).scan(&options)
    }

    #[test]
    fn analysis_is_attached_per_record() {
        let fs = MemoryScanFs::new().with_file(
            "/home/u/.bashrc",
            "export EDITOR=vim\nalias ll='ls -l'\napt install jq\n",
        );
        let mut result = scan(fs, &["/home/u/.bashrc"]);
        analyze_records(&mut result, &ParserRegistry::new());

        let record = result.configs.first().unwrap();
        let analysis = record.analysis.as_ref().unwrap();
        assert_eq!(analysis["parsed"]["variables"]["EDITOR"], "vim");
        assert_eq!(analysis["summary"]["line_count"], 3);
        assert_eq!(record.dependencies, ["jq"]);
    }

    #[test]
    fn records_without_analysis_requested_stay_bare() {
        let fs = MemoryScanFs::new().with_file("/home/u/.bashrc", "export A=1\n");
        let result = scan(fs, &["/home/u/.bashrc"]);
        assert!(result.configs.first().unwrap().analysis.is_none());
        assert!(result.configs.first().unwrap().dependencies.is_empty());
    }
}
