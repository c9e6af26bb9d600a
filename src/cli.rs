//! Command-line interface definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the dotfile scanner.
#[derive(Parser, Debug)]
#[command(
    name = "dotscan",
    about = "Discover, classify, and analyze dotfiles",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan for configuration files and report what was found
    Scan(ScanOpts),
    /// Scan and run the format-specific analyzers on every file found
    Analyze(ScanOpts),
    /// Print version information
    Version,
}

/// Options shared by the `scan` and `analyze` subcommands.
#[derive(Parser, Debug, Clone)]
pub struct ScanOpts {
    /// Paths to scan instead of the default dotfile locations
    #[arg(short, long = "path")]
    pub paths: Vec<String>,

    /// Descend into hidden directories and include hidden files inside them
    #[arg(long)]
    pub include_hidden: bool,

    /// Maximum file size in bytes; larger files are reported as errors
    #[arg(long)]
    pub max_file_size: Option<u64>,

    /// Glob-style patterns excluding matching paths (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Emit results as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_scan_defaults() {
        let cli = Cli::parse_from(["dotscan", "scan"]);
        assert!(matches!(cli.command, Command::Scan(_)));
        if let Command::Scan(opts) = cli.command {
            assert!(opts.paths.is_empty());
            assert!(!opts.include_hidden);
            assert_eq!(opts.max_file_size, None);
            assert!(!opts.json);
        }
    }

    #[test]
    fn parse_scan_with_paths() {
        let cli = Cli::parse_from(["dotscan", "scan", "--path", "~/.bashrc", "-p", "~/.vimrc"]);
        if let Command::Scan(opts) = cli.command {
            assert_eq!(opts.paths, vec!["~/.bashrc", "~/.vimrc"]);
        } else {
            panic!("expected scan command");
        }
    }

    #[test]
    fn parse_scan_exclude_patterns() {
        let cli = Cli::parse_from(["dotscan", "scan", "-x", "*.swp", "--exclude", "node_modules"]);
        if let Command::Scan(opts) = cli.command {
            assert_eq!(opts.exclude, vec!["*.swp", "node_modules"]);
        } else {
            panic!("expected scan command");
        }
    }

    #[test]
    fn parse_scan_max_file_size() {
        let cli = Cli::parse_from(["dotscan", "scan", "--max-file-size", "4096"]);
        if let Command::Scan(opts) = cli.command {
            assert_eq!(opts.max_file_size, Some(4096));
        } else {
            panic!("expected scan command");
        }
    }

    #[test]
    fn parse_analyze_json() {
        let cli = Cli::parse_from(["dotscan", "analyze", "--json"]);
        assert!(matches!(cli.command, Command::Analyze(_)));
        if let Command::Analyze(opts) = cli.command {
            assert!(opts.json);
        }
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["dotscan", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn parse_verbose_is_global() {
        let cli = Cli::parse_from(["dotscan", "scan", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_include_hidden() {
        let cli = Cli::parse_from(["dotscan", "scan", "--include-hidden"]);
        if let Command::Scan(opts) = cli.command {
            assert!(opts.include_hidden);
        } else {
            panic!("expected scan command");
        }
    }
}
