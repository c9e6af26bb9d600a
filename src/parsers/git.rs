//! Parser for git configuration files (INI-style sections).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use super::deps::{COMMAND_PACKAGES, push_unique};
use super::{ConfigParser, ConfigSummary, ParsedConfig, ValidationResult, Value, strip_quotes};
use crate::error::ParseError;

/// Quoted token inside a section header, e.g. the name in `[remote "origin"]`.
static QUOTED_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r#""([^"]+)""#).expect("static regex")
});

/// Editors worth mapping to a package when configured as `core.editor`.
const EDITOR_PACKAGES: &[(&str, &str)] = &[
    ("nvim", "neovim"),
    ("vim", "vim"),
    ("nano", "nano"),
    ("emacs", "emacs"),
    ("code", "code"),
];

/// Parser for the version-control configuration family.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitConfigParser;

impl GitConfigParser {
    /// Create a git config parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Parsed intermediate form shared by the trait methods.
struct Sections {
    /// section → key → coerced value.
    map: BTreeMap<String, BTreeMap<String, Value>>,
    comments: Vec<String>,
    errors: Vec<String>,
}

/// Parse INI content into nested sections, tracking a current-section state
/// and collecting malformed-line diagnostics instead of failing.
fn parse_sections(content: &str) -> Sections {
    let mut map: BTreeMap<String, BTreeMap<String, Value>> = BTreeMap::new();
    let mut comments = Vec::new();
    let mut errors = Vec::new();
    let mut current: Option<String> = None;

    for (idx, line) in content.lines().enumerate() {
        let n = idx + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if let Some(comment) = trimmed.strip_prefix('#').or_else(|| trimmed.strip_prefix(';')) {
            comments.push(comment.trim().to_string());
            continue;
        }

        if trimmed.starts_with('[') {
            if let Some(header) = parse_section_header(trimmed) {
                map.entry(header.clone()).or_default();
                current = Some(header);
            } else {
                errors.push(format!("line {n}: unterminated section header"));
                current = None;
            }
            continue;
        }

        if let Some((key, value)) = parse_kv_line(trimmed) {
            if let Some(ref section) = current {
                map.entry(section.clone())
                    .or_default()
                    .insert(key, Value::coerce(&value));
            } else {
                errors.push(format!("line {n}: entry outside of any section"));
            }
        } else {
            errors.push(format!("line {n}: malformed key-value pair"));
        }
    }

    Sections {
        map,
        comments,
        errors,
    }
}

/// Parse a `[section]` or `[section "subname"]` header into a normalized
/// name (`section` or `section.subname`).
fn parse_section_header(line: &str) -> Option<String> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    if inner.is_empty() {
        return None;
    }
    if let Some(caps) = QUOTED_NAME_RE.captures(inner)
        && let Some(sub) = caps.get(1)
    {
        let base = inner.split_whitespace().next().unwrap_or(inner);
        return Some(format!("{base}.{}", sub.as_str()));
    }
    Some(inner.to_lowercase())
}

/// Parse a `key = value` line, stripping quotes from the value.
fn parse_kv_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    Some((
        key.to_lowercase(),
        strip_quotes(value.trim()).to_string(),
    ))
}

/// Look up `section.key` across the parsed map.
fn lookup<'a>(sections: &'a Sections, section: &str, key: &str) -> Option<&'a Value> {
    sections.map.get(section)?.get(key)
}

impl ConfigParser for GitConfigParser {
    fn parse(&self, content: &str) -> Result<ParsedConfig, ParseError> {
        let sections = parse_sections(content);

        let mut variables = BTreeMap::new();
        let mut imports = Vec::new();
        let mut aliases = BTreeMap::new();
        let mut remotes = BTreeMap::new();

        for (section, entries) in &sections.map {
            for (key, value) in entries {
                variables.insert(format!("{section}.{key}"), value.clone());

                if section == "alias" {
                    aliases.insert(key.clone(), value.as_text());
                }
                if let Some(remote) = section.strip_prefix("remote.")
                    && key == "url"
                {
                    remotes.insert(remote.to_string(), value.as_text());
                }
                if section == "include" && key == "path" {
                    imports.push(value.as_text());
                }
            }
        }

        let validation = self.validate(content)?;

        Ok(ParsedConfig {
            data: json!({
                "sections": sections.map,
                "aliases": aliases,
                "remotes": remotes,
            }),
            variables,
            imports,
            comments: sections.comments,
            validation,
        })
    }

    fn validate(&self, content: &str) -> Result<ValidationResult, ParseError> {
        let sections = parse_sections(content);
        let warnings = Vec::new();
        let mut suggestions = Vec::new();

        let has_name = lookup(&sections, "user", "name").is_some();
        let has_email = lookup(&sections, "user", "email").is_some();
        if has_name != has_email {
            suggestions.push(
                "user.name and user.email should be configured together".to_string(),
            );
        }

        if let Some(editor) = lookup(&sections, "core", "editor")
            && editor.as_text().contains("vim")
            && let Some(merge_tool) = lookup(&sections, "merge", "tool")
            && !merge_tool.as_text().contains("vimdiff")
        {
            suggestions.push(format!(
                "core.editor is vim but merge.tool is {}; vimdiff keeps the workflow consistent",
                merge_tool.as_text()
            ));
        }

        Ok(ValidationResult::new(sections.errors, warnings, suggestions))
    }

    fn extract_dependencies(&self, content: &str) -> Vec<String> {
        let sections = parse_sections(content);
        let mut deps = Vec::new();

        // The base tool itself is always a dependency of its own config.
        push_unique(&mut deps, "git");

        if let Some(editor) = lookup(&sections, "core", "editor") {
            let editor = editor.as_text();
            for &(needle, package) in EDITOR_PACKAGES {
                if editor.contains(needle) {
                    push_unique(&mut deps, package);
                    break;
                }
            }
        }

        for section in ["diff", "merge"] {
            if let Some(tool) = lookup(&sections, section, "tool") {
                push_unique(&mut deps, tool.as_text());
            }
        }

        // Only the external credential manager is a real package; the
        // built-in store/cache helpers ship with git.
        if let Some(helper) = lookup(&sections, "credential", "helper")
            && helper.as_text().contains("manager")
        {
            push_unique(&mut deps, "git-credential-manager");
        }

        if let Some(aliases) = sections.map.get("alias") {
            for value in aliases.values() {
                let text = value.as_text();
                for &(command, package) in COMMAND_PACKAGES {
                    if text.split_whitespace().any(|t| t == command) {
                        push_unique(&mut deps, package);
                    }
                }
            }
        }

        deps
    }

    fn summary(&self, content: &str) -> ConfigSummary {
        let sections = parse_sections(content);
        let line_count = content.lines().count();

        let variable_count: usize = sections.map.values().map(BTreeMap::len).sum();
        let alias_count = sections.map.get("alias").map_or(0, BTreeMap::len);
        let remote_count = sections
            .map
            .keys()
            .filter(|s| s.starts_with("remote."))
            .count();

        let mut features = Vec::new();
        if alias_count > 0 {
            push_unique(&mut features, "aliases");
        }
        if remote_count > 0 {
            push_unique(&mut features, "remotes");
        }
        if sections.map.contains_key("user") {
            push_unique(&mut features, "identity");
        }
        if sections.map.contains_key("credential") {
            push_unique(&mut features, "credential-helper");
        }
        if sections.map.contains_key("include") {
            push_unique(&mut features, "includes");
        }

        ConfigSummary {
            description: format!(
                "git configuration with {} sections, {alias_count} aliases, and {remote_count} remotes",
                sections.map.len()
            ),
            line_count,
            function_count: alias_count,
            variable_count,
            complex: sections.map.len() > 8 || line_count > 60,
            features,
        }
    }
}
