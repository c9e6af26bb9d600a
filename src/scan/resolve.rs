//! Home-relative and working-directory-relative path resolution.

use std::path::{Path, PathBuf};

/// Resolve a user-supplied path string to an absolute path.
///
/// `~` and `~/rest` expand against the user's home directory; relative
/// paths are joined onto the current working directory; absolute paths
/// pass through unchanged. Resolution is pure string/path manipulation and
/// always succeeds — if the home or working directory cannot be determined
/// the input is returned as-is.
///
/// # Examples
///
/// ```
/// use dotscan_cli::scan::resolve;
///
/// let resolved = resolve("/etc/profile");
/// assert_eq!(resolved, std::path::PathBuf::from("/etc/profile"));
/// ```
#[must_use]
pub fn resolve(path: &str) -> PathBuf {
    if let Some(rest) = strip_home_prefix(path) {
        if let Some(home) = dirs::home_dir() {
            return if rest.is_empty() {
                home
            } else {
                home.join(rest)
            };
        }
        return PathBuf::from(path);
    }

    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }
    std::env::current_dir().map_or_else(|_| candidate.to_path_buf(), |cwd| cwd.join(candidate))
}

/// Split off the `~` shorthand, returning the remainder without its leading
/// separator. Returns `None` for paths like `~user` which are not expanded.
fn strip_home_prefix(path: &str) -> Option<&str> {
    if path == "~" {
        return Some("");
    }
    path.strip_prefix("~/")
        .or_else(|| path.strip_prefix("~\\"))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_passes_through() {
        assert_eq!(resolve("/usr/local/bin"), PathBuf::from("/usr/local/bin"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = dirs::home_dir().expect("home dir should exist in tests");
        assert_eq!(resolve("~"), home);
    }

    #[test]
    fn tilde_slash_joins_remainder() {
        let home = dirs::home_dir().expect("home dir should exist in tests");
        assert_eq!(resolve("~/.bashrc"), home.join(".bashrc"));
    }

    #[test]
    fn tilde_user_is_not_expanded() {
        let resolved = resolve("~otheruser/.bashrc");
        // No `~user` expansion: treated as a relative path under the cwd.
        assert!(resolved.ends_with("~otheruser/.bashrc"));
    }

    #[test]
    fn relative_path_joins_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve("conf/settings.ini"), cwd.join("conf/settings.ini"));
    }

    #[test]
    fn nested_home_path_preserves_structure() {
        let home = dirs::home_dir().expect("home dir should exist in tests");
        assert_eq!(resolve("~/.config/nvim"), home.join(".config/nvim"));
    }
}
