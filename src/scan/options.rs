//! Scan inputs: requested paths, hidden-file policy, size and exclusion
//! constraints.

use serde::{Deserialize, Serialize};

/// Default maximum file size: 1 MiB. Dotfiles are small; anything larger is
/// almost certainly not hand-written configuration.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Well-known dotfile locations scanned when no explicit paths are given.
pub const DEFAULT_SCAN_PATHS: &[&str] = &[
    "~/.bashrc",
    "~/.bash_profile",
    "~/.bash_aliases",
    "~/.profile",
    "~/.zshrc",
    "~/.zshenv",
    "~/.vimrc",
    "~/.gitconfig",
    "~/.tmux.conf",
    "~/.ssh/config",
    "~/.config",
];

/// Externally supplied options controlling one scan call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Paths to scan. `None` means the default dotfile locations are used
    /// verbatim.
    pub paths: Option<Vec<String>>,
    /// Whether directory walks descend into hidden entries.
    pub include_hidden: bool,
    /// Maximum file size in bytes; larger files fail with a size-limit
    /// error and are never read.
    pub max_file_size: u64,
    /// Glob-like exclusion patterns (`*` = any characters).
    pub exclude_patterns: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            paths: None,
            include_hidden: false,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            exclude_patterns: Vec::new(),
        }
    }
}

impl ScanOptions {
    /// The effective path list: explicit paths if given, else the default
    /// dotfile locations.
    #[must_use]
    pub fn effective_paths(&self) -> Vec<String> {
        self.paths.clone().unwrap_or_else(|| {
            DEFAULT_SCAN_PATHS
                .iter()
                .map(ToString::to_string)
                .collect()
        })
    }
}
