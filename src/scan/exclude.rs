//! Glob-like exclusion patterns for the directory walker.

use regex::Regex;

/// Compiled exclusion patterns.
///
/// Each pattern is glob-like: `*` means "any sequence of characters", every
/// other character is literal. Patterns are compiled once at construction by
/// escaping the literal segments and joining them with `.*`, then matched as
/// unanchored substrings of the candidate path. Multiple patterns are OR'ed.
#[derive(Debug, Clone, Default)]
pub struct ExcludeMatcher {
    regexes: Vec<Regex>,
}

impl ExcludeMatcher {
    /// Compile `patterns` into a matcher. An empty list never excludes.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotscan_cli::scan::ExcludeMatcher;
    ///
    /// let matcher = ExcludeMatcher::new(&["*.log".to_string(), "node_modules".to_string()]);
    /// assert!(matcher.is_excluded("/home/user/debug.log"));
    /// assert!(matcher.is_excluded("/repo/node_modules/x/package.json"));
    /// assert!(!matcher.is_excluded("/home/user/.bashrc"));
    /// ```
    #[must_use]
    pub fn new(patterns: &[String]) -> Self {
        let regexes = patterns
            .iter()
            .filter_map(|p| Regex::new(&pattern_to_regex(p)).ok())
            .collect();
        Self { regexes }
    }

    /// Whether `path` matches any exclusion pattern.
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(path))
    }
}

/// Translate a glob-like pattern into a regex source string: `*` becomes
/// `.*`, everything else is escaped to match literally.
fn pattern_to_regex(pattern: &str) -> String {
    pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*")
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn no_patterns_never_excludes() {
        let matcher = ExcludeMatcher::new(&[]);
        assert!(!matcher.is_excluded("/anything/at/all"));
    }

    #[test]
    fn literal_pattern_matches_substring() {
        let matcher = ExcludeMatcher::new(&[".cache".to_string()]);
        assert!(matcher.is_excluded("/home/user/.cache/something"));
        assert!(!matcher.is_excluded("/home/user/.config"));
    }

    #[test]
    fn star_matches_any_sequence() {
        let matcher = ExcludeMatcher::new(&["*.swp".to_string()]);
        assert!(matcher.is_excluded("/home/user/.bashrc.swp"));
        assert!(matcher.is_excluded(".vimrc.swp"));
        assert!(!matcher.is_excluded("/home/user/.bashrc"));
    }

    #[test]
    fn star_in_the_middle() {
        let matcher = ExcludeMatcher::new(&["backup*old".to_string()]);
        assert!(matcher.is_excluded("/tmp/backup-2024-old"));
        assert!(!matcher.is_excluded("/tmp/backup-2024-new"));
    }

    #[test]
    fn multiple_patterns_are_ored() {
        let matcher = ExcludeMatcher::new(&["*.log".to_string(), "tmp".to_string()]);
        assert!(matcher.is_excluded("run.log"));
        assert!(matcher.is_excluded("/var/tmp/file"));
        assert!(!matcher.is_excluded("/etc/profile"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        // A dot in the pattern must not act as a regex wildcard.
        let matcher = ExcludeMatcher::new(&[".git".to_string()]);
        assert!(matcher.is_excluded("/repo/.git/config"));
        assert!(!matcher.is_excluded("/repo/digit/config"));
    }

    #[test]
    fn match_is_substring_not_anchored() {
        let matcher = ExcludeMatcher::new(&["ssh".to_string()]);
        assert!(matcher.is_excluded("/home/user/.ssh/config"));
    }
}
