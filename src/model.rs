//! Core data model: configuration kinds, backup lifecycle, and the
//! configuration record produced by the scanner.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format family of a configuration file.
///
/// This enumeration is fixed: the scanner only ever produces records tagged
/// with one of these kinds. Files whose name and extension match nothing in
/// the classification tables are skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigKind {
    /// Bash shell configuration (`.bashrc`, `.bash_profile`, …).
    Bash,
    /// Zsh shell configuration (`.zshrc`, `.zshenv`, …).
    Zsh,
    /// Vim editor configuration (`.vimrc`, `init.vim`, …).
    Vim,
    /// Git configuration (`.gitconfig`, `.gitignore`, …).
    Git,
    /// SSH client configuration (`~/.ssh/config`).
    Ssh,
    /// VS Code settings (`settings.json`, `keybindings.json`).
    VsCode,
    /// Systemd unit files (`*.service`, `*.timer`).
    Systemd,
    /// Recognized as configuration but of no dedicated format family.
    Custom,
}

impl ConfigKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Bash,
        Self::Zsh,
        Self::Vim,
        Self::Git,
        Self::Ssh,
        Self::VsCode,
        Self::Systemd,
        Self::Custom,
    ];

    /// Lowercase tag used in serialized output and log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Vim => "vim",
            Self::Git => "git",
            Self::Ssh => "ssh",
            Self::VsCode => "vscode",
            Self::Systemd => "systemd",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backup lifecycle tag on a configuration record.
///
/// The scanner always starts records at [`BackupStatus::NotBackedUp`]; the
/// other states are set by external backup collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupStatus {
    /// Never backed up.
    NotBackedUp,
    /// Queued for backup.
    Pending,
    /// Successfully backed up.
    BackedUp,
    /// The last backup attempt failed.
    Error,
}

/// One discovered configuration file with its raw content and metadata.
///
/// Created by the file scanner at scan time and immutable within the core;
/// external collaborators may later attach an [`analysis`](Self::analysis)
/// payload and advance the [`backup_status`](Self::backup_status).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Classified format family.
    pub kind: ConfigKind,
    /// Raw text content.
    pub content: String,
    /// Last-modified timestamp of the file.
    pub last_modified: DateTime<Utc>,
    /// File size in bytes.
    pub size: u64,
    /// Package names this configuration depends on. Empty at scan time;
    /// populated by a later parse phase.
    pub dependencies: Vec<String>,
    /// Structured analysis attached by an external collaborator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<serde_json::Value>,
    /// Whether the configuration is considered active.
    pub is_active: bool,
    /// Backup lifecycle state.
    pub backup_status: BackupStatus,
}
