//! Dotfile discovery and analysis engine.
//!
//! Finds configuration files under a user's home directory (or any
//! requested paths), classifies each by well-known name, extension, or
//! naming convention, and runs format-specific parsers that extract
//! variables, imports, dependencies, and validation diagnostics.
//!
//! The public API is organised into three layers:
//!
//! - **[`scan`]** — path resolution, classification, and the scan orchestrator
//! - **[`parsers`]** — per-format parsing, validation, and dependency extraction
//! - **[`commands`]** — top-level subcommand orchestration (`scan`, `analyze`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod model;
pub mod parsers;
pub mod scan;
