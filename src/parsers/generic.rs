//! Fallback parser for formats without a dedicated implementation.
//!
//! Extracts what can be read from any line-oriented text: comments,
//! line counts, and install-command dependencies. Everything else is
//! reported as opaque.

use std::collections::BTreeMap;

use serde_json::json;

use super::deps::scan_install_commands;
use super::{ConfigParser, ConfigSummary, ParsedConfig, ValidationResult};
use crate::error::ParseError;
use crate::model::ConfigKind;

/// Line-oriented parser for kinds without format-specific handling.
#[derive(Debug, Clone, Copy)]
pub struct GenericParser {
    kind: ConfigKind,
}

impl GenericParser {
    /// Create a generic parser labeled with `kind`.
    #[must_use]
    pub const fn new(kind: ConfigKind) -> Self {
        Self { kind }
    }

    /// A generic parser for the catch-all kind.
    #[must_use]
    pub const fn custom() -> Self {
        Self::new(ConfigKind::Custom)
    }
}

impl ConfigParser for GenericParser {
    fn parse(&self, content: &str) -> Result<ParsedConfig, ParseError> {
        let mut comments = Vec::new();
        let mut content_lines = 0usize;

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix('#') {
                comments.push(comment.trim().to_string());
            } else {
                content_lines += 1;
            }
        }

        Ok(ParsedConfig {
            data: json!({
                "format": self.kind.as_str(),
                "content_lines": content_lines,
            }),
            variables: BTreeMap::new(),
            imports: Vec::new(),
            comments,
            validation: self.validate(content)?,
        })
    }

    fn validate(&self, _content: &str) -> Result<ValidationResult, ParseError> {
        // Without format knowledge nothing can be judged invalid.
        Ok(ValidationResult::clean())
    }

    fn extract_dependencies(&self, content: &str) -> Vec<String> {
        scan_install_commands(content)
    }

    fn summary(&self, content: &str) -> ConfigSummary {
        let line_count = content.lines().count();
        let non_empty = content.lines().filter(|l| !l.trim().is_empty()).count();

        ConfigSummary {
            description: format!("{} configuration with {non_empty} content lines", self.kind),
            line_count,
            function_count: 0,
            variable_count: 0,
            complex: non_empty > 100,
            features: Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parser() -> GenericParser {
        GenericParser::new(ConfigKind::Custom)
    }

    #[test]
    fn comments_are_extracted() {
        let content = "# top note\nset -g mouse on\n  # indented\n";
        let parsed = parser().parse(content).unwrap();
        assert_eq!(parsed.comments, ["top note", "indented"]);
        assert_eq!(parsed.data["content_lines"], 1);
    }

    #[test]
    fn anything_validates_clean() {
        let result = parser().validate("{{{ not really a config ]]]").unwrap();
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn install_commands_still_found() {
        let deps = parser().extract_dependencies("run: apt install tmux jq\n");
        assert_eq!(deps, ["tmux", "jq"]);
    }

    #[test]
    fn summary_counts_non_empty_lines() {
        let summary = parser().summary("a\n\nb\n\n");
        assert_eq!(summary.line_count, 4);
        assert!(summary.description.contains("2 content lines"));
        assert!(!summary.complex);
    }

    #[test]
    fn summary_flags_large_files() {
        let content = "x\n".repeat(150);
        assert!(parser().summary(&content).complex);
    }

    #[test]
    fn kind_label_appears_in_description() {
        let summary = GenericParser::new(ConfigKind::Systemd).summary("");
        assert!(summary.description.starts_with("systemd"));
    }
}
