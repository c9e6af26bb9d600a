//! Shared dependency extraction: package-manager install invocations and
//! the bare-command lookup table.
//!
//! Used by the shell parser and the generic fallback so both recognize the
//! same install idioms.

use std::sync::LazyLock;

use regex::Regex;

/// Install invocations recognized line by line. The capture group holds the
/// trailing package arguments.
static INSTALL_COMMANDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:apt-get|apt)\s+install\s+(.+)",
        r"snap\s+install\s+(.+)",
        r"pip3?\s+install\s+(.+)",
        r"npm\s+install\s+(?:-g\s+)?(.+)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// Bare command → package providing it. Applied when the command name
/// appears as a word on a line that is not itself an existence check.
pub(crate) const COMMAND_PACKAGES: &[(&str, &str)] = &[
    ("git", "git"),
    ("docker", "docker.io"),
    ("kubectl", "kubectl"),
    ("vim", "vim"),
    ("nvim", "neovim"),
    ("tmux", "tmux"),
    ("curl", "curl"),
    ("wget", "wget"),
    ("jq", "jq"),
    ("rg", "ripgrep"),
    ("fzf", "fzf"),
];

/// Append `value` unless already present, preserving first-seen order.
pub(crate) fn push_unique(list: &mut Vec<String>, value: impl Into<String>) {
    let value = value.into();
    if !value.is_empty() && !list.contains(&value) {
        list.push(value);
    }
}

/// Scan content for package-manager install invocations and known bare
/// commands, returning package names deduplicated in first-seen order.
pub(crate) fn scan_install_commands(content: &str) -> Vec<String> {
    let mut packages = Vec::new();

    for line in content.lines() {
        for re in INSTALL_COMMANDS.iter() {
            if let Some(caps) = re.captures(line)
                && let Some(args) = caps.get(1)
            {
                for token in args.as_str().split_whitespace() {
                    // Flags and shell operators are not package names.
                    if token.starts_with('-') || token == "&&" || token == "||" || token == ";" {
                        continue;
                    }
                    push_unique(&mut packages, token);
                }
            }
        }

        if is_existence_check(line) {
            continue;
        }
        for &(command, package) in COMMAND_PACKAGES {
            if line.split_whitespace().any(|t| t == command) {
                push_unique(&mut packages, package);
            }
        }
    }

    packages
}

/// Lines probing for a command's presence do not imply a dependency.
fn is_existence_check(line: &str) -> bool {
    line.contains("which ") || line.contains("command -v")
}
