//! Parser for bash and zsh configuration files.
//!
//! The two dialects share enough syntax that one parser covers both; the
//! configured kind only affects the summary wording and the `shell` tag in
//! the structured payload.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use super::deps::{push_unique, scan_install_commands};
use super::{ConfigParser, ConfigSummary, ParsedConfig, ValidationResult, Value, strip_quotes};
use crate::error::ParseError;
use crate::model::ConfigKind;

/// `NAME=value` assignment, optionally `export`-prefixed. Only
/// uppercase-style names count as variables; lowercase assignments are
/// usually loop counters or locals.
static VARIABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^(?:export\s+)?([A-Z_][A-Z0-9_]*)=(.*)$").expect("static regex")
});

/// `source file` or `. file` directive.
static SOURCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^(?:source|\.)\s+(\S+)").expect("static regex")
});

/// Zero-argument function definition opening a block.
static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^(?:function\s+)?([A-Za-z_][A-Za-z0-9_-]*)\s*\(\)\s*\{").expect("static regex")
});

/// `alias name=value` definition.
static ALIAS_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^alias\s+([^=\s]+)=(.*)$").expect("static regex")
});

/// Parser for the shell configuration family.
#[derive(Debug, Clone, Copy)]
pub struct ShellParser {
    kind: ConfigKind,
}

impl ShellParser {
    /// Create a shell parser for `kind` (bash or zsh).
    #[must_use]
    pub const fn new(kind: ConfigKind) -> Self {
        Self { kind }
    }
}

impl ConfigParser for ShellParser {
    fn parse(&self, content: &str) -> Result<ParsedConfig, ParseError> {
        let mut variables = BTreeMap::new();
        let mut imports = Vec::new();
        let mut comments = Vec::new();
        let mut functions = Vec::new();
        let mut aliases = BTreeMap::new();

        // Single line-oriented pass; the first matching rule consumes the
        // whole line.
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix('#') {
                comments.push(comment.trim().to_string());
            } else if let Some(caps) = VARIABLE_RE.captures(trimmed) {
                if let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) {
                    variables.insert(name.as_str().to_string(), Value::coerce(value.as_str()));
                }
            } else if let Some(caps) = SOURCE_RE.captures(trimmed) {
                if let Some(target) = caps.get(1) {
                    imports.push(strip_quotes(target.as_str()).to_string());
                }
            } else if let Some(caps) = FUNCTION_RE.captures(trimmed) {
                if let Some(name) = caps.get(1) {
                    functions.push(name.as_str().to_string());
                }
            } else if let Some(caps) = ALIAS_RE.captures(trimmed)
                && let (Some(name), Some(value)) = (caps.get(1), caps.get(2))
            {
                aliases.insert(
                    name.as_str().to_string(),
                    strip_quotes(value.as_str().trim()).to_string(),
                );
            }
        }

        let validation = self.validate(content)?;

        Ok(ParsedConfig {
            data: json!({
                "shell": self.kind.as_str(),
                "functions": functions,
                "aliases": aliases,
            }),
            variables,
            imports,
            comments,
            validation,
        })
    }

    fn validate(&self, content: &str) -> Result<ValidationResult, ParseError> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut suggestions = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let n = idx + 1;
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                continue;
            }

            if line.matches("$((").count() != line.matches("))").count() {
                errors.push(format!("line {n}: unbalanced arithmetic expansion"));
            }
            if line.contains("${") && line.matches("${").count() != line.matches('}').count() {
                errors.push(format!("line {n}: unbalanced variable expansion braces"));
            }
            if line.matches('`').count() % 2 == 1 {
                errors.push(format!("line {n}: unclosed command substitution (backtick)"));
            }

            if line.contains("rm -rf") && !line.contains("$HOME") {
                warnings.push(format!("line {n}: rm -rf without a $HOME reference"));
            }
            if line.contains("sudo") && !line.contains("echo") {
                warnings.push(format!("line {n}: sudo invocation in configuration file"));
            }

            if let Some(caps) = VARIABLE_RE.captures(trimmed)
                && trimmed.starts_with("export")
                && let Some(value) = caps.get(2)
            {
                let v = value.as_str();
                let risky = v.contains('$') || v.contains(char::is_whitespace);
                if !v.starts_with('"') && !v.starts_with('\'') && risky {
                    suggestions.push(format!("line {n}: consider quoting the exported value"));
                }
            }
            if trimmed.starts_with("cd ") && !line.contains("||") {
                suggestions.push(format!("line {n}: cd without a || fallback"));
            }
        }

        Ok(ValidationResult::new(errors, warnings, suggestions))
    }

    fn extract_dependencies(&self, content: &str) -> Vec<String> {
        let mut deps = Vec::new();
        for package in scan_install_commands(content) {
            push_unique(&mut deps, package);
        }
        deps
    }

    fn summary(&self, content: &str) -> ConfigSummary {
        let line_count = content.lines().count();
        let mut variable_count = 0;
        let mut function_count = 0;
        let mut alias_count = 0;
        let mut features = Vec::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                continue;
            }
            if VARIABLE_RE.is_match(trimmed) {
                variable_count += 1;
            } else if FUNCTION_RE.is_match(trimmed) {
                function_count += 1;
            } else if ALIAS_RE.is_match(trimmed) {
                alias_count += 1;
            }

            if trimmed.contains("PATH=") {
                push_unique(&mut features, "path-modification");
            }
            if trimmed.contains("PS1=") || trimmed.contains("PROMPT=") {
                push_unique(&mut features, "prompt-customization");
            }
            if trimmed.contains("complete ") || trimmed.contains("compinit") {
                push_unique(&mut features, "completion");
            }
        }

        if alias_count > 0 {
            push_unique(&mut features, "aliases");
        }
        if function_count > 0 {
            push_unique(&mut features, "functions");
        }

        ConfigSummary {
            description: format!(
                "{} configuration with {variable_count} variables, {alias_count} aliases, and {function_count} functions",
                self.kind.as_str()
            ),
            line_count,
            function_count,
            variable_count,
            complex: line_count > 50 || function_count > 5,
            features,
        }
    }
}
