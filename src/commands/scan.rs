//! The `scan` subcommand: discover and classify configuration files.

use anyhow::Result;

use crate::cli::ScanOpts;
use crate::scan::Scanner;

/// Run the scan command.
///
/// # Errors
///
/// Returns an error if the result cannot be serialized for output. Scan
/// failures themselves are data, not errors: they appear in the report.
pub fn run(opts: &ScanOpts) -> Result<()> {
    let options = super::to_scan_options(opts);
    let result = Scanner::new().scan(&options);
    super::emit(&result, opts.json)
}
