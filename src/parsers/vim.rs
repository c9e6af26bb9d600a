//! Parser for vim configuration files.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use super::deps::push_unique;
use super::{ConfigParser, ConfigSummary, ParsedConfig, ValidationResult, Value, strip_quotes};
use crate::error::ParseError;

/// `set option` or `set option=value`. Negated options (`set nowrap`) keep
/// their `no` prefix: without vim's option table there is no way to tell
/// `nowrap` from an option that genuinely starts with `no`.
static SET_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^set\s+([a-z][a-z0-9_]*)(?:=(\S+))?").expect("static regex")
});

/// Any `map` family command: `map`, `noremap`, `nmap`, `nnoremap`, ….
static MAP_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^([nvixsoc]?(?:nore)?map)\s+(\S+)\s+(.+)$").expect("static regex")
});

/// Plugin declaration for vim-plug, Vundle, or NeoBundle.
static PLUGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r#"^(?:Plug|Plugin|NeoBundle)\s+['"]([^'"]+)['"]"#).expect("static regex")
});

/// `function Name(...)` opening.
static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^function!?\s+([A-Za-z_][A-Za-z0-9_#]*)").expect("static regex")
});

/// `source path` directive.
static SOURCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^source\s+(\S+)").expect("static regex")
});

/// External tools commonly referenced from vim configs, and the package
/// providing each.
static TOOL_PACKAGES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\bfzf\b", "fzf"),
        (r"\b(?:rg|ripgrep)\b", "ripgrep"),
        (r"\bctags\b", "universal-ctags"),
        (r"\bnode\b", "nodejs"),
        (r"\bpython3\b", "python3"),
    ]
    .iter()
    .filter_map(|&(p, pkg)| Regex::new(p).ok().map(|re| (re, pkg)))
    .collect()
});

/// Parser for the editor configuration family.
#[derive(Debug, Clone, Copy, Default)]
pub struct VimParser;

impl VimParser {
    /// Create a vim parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigParser for VimParser {
    fn parse(&self, content: &str) -> Result<ParsedConfig, ParseError> {
        let mut variables = BTreeMap::new();
        let mut imports = Vec::new();
        let mut comments = Vec::new();
        let mut mappings = BTreeMap::new();
        let mut plugins = Vec::new();
        let mut functions = Vec::new();
        let mut autocommands = Vec::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix('"') {
                comments.push(comment.trim().to_string());
            } else if let Some(caps) = SET_RE.captures(trimmed) {
                if let Some(name) = caps.get(1) {
                    let value = caps.get(2).map_or(Value::Bool(true), |v| {
                        Value::coerce(strip_quotes(v.as_str()))
                    });
                    variables.insert(name.as_str().to_string(), value);
                }
            } else if let Some(caps) = MAP_RE.captures(trimmed) {
                if let (Some(key), Some(command)) = (caps.get(2), caps.get(3)) {
                    mappings.insert(key.as_str().to_string(), command.as_str().to_string());
                }
            } else if let Some(caps) = PLUGIN_RE.captures(trimmed) {
                if let Some(name) = caps.get(1) {
                    plugins.push(name.as_str().to_string());
                }
            } else if let Some(caps) = FUNCTION_RE.captures(trimmed) {
                if let Some(name) = caps.get(1) {
                    functions.push(name.as_str().to_string());
                }
            } else if let Some(caps) = SOURCE_RE.captures(trimmed) {
                if let Some(target) = caps.get(1) {
                    imports.push(strip_quotes(target.as_str()).to_string());
                }
            } else if trimmed.starts_with("autocmd") {
                autocommands.push(trimmed.to_string());
            }
        }

        let validation = self.validate(content)?;

        Ok(ParsedConfig {
            data: json!({
                "mappings": mappings,
                "plugins": plugins,
                "functions": functions,
                "autocommands": autocommands,
            }),
            variables,
            imports,
            comments,
            validation,
        })
    }

    fn validate(&self, content: &str) -> Result<ValidationResult, ParseError> {
        let errors = Vec::new();
        let mut warnings = Vec::new();
        let mut suggestions = Vec::new();

        let has_plugin_manager = content.contains("plug#begin")
            || content.contains("vundle#begin")
            || content.contains("call plug#");
        let mut declares_plugins = false;
        let mut in_try = false;

        for (idx, line) in content.lines().enumerate() {
            let n = idx + 1;
            let trimmed = line.trim();
            if trimmed.starts_with('"') {
                continue;
            }
            if trimmed == "try" {
                in_try = true;
            } else if trimmed == "endtry" {
                in_try = false;
            }

            if let Some(caps) = MAP_RE.captures(trimmed)
                && trimmed.contains("<leader>")
                && let Some(cmd) = caps.get(1)
                && !cmd.as_str().contains("nore")
            {
                warnings.push(format!(
                    "line {n}: leader mapping uses recursive {}; prefer the noremap form",
                    cmd.as_str()
                ));
            }

            if let Some(caps) = SET_RE.captures(trimmed)
                && let Some(value) = caps.get(2)
            {
                let v = value.as_str();
                let is_quoted = v.starts_with('\'') || v.starts_with('"');
                let is_numeric = v.parse::<i64>().is_ok();
                if !is_quoted && !is_numeric && v.chars().any(char::is_alphabetic) {
                    suggestions.push(format!("line {n}: unquoted string value in set assignment"));
                }
            }

            if PLUGIN_RE.is_match(trimmed) {
                declares_plugins = true;
            }

            if trimmed.starts_with("colorscheme") && !trimmed.contains("silent!") && !in_try {
                suggestions.push(format!(
                    "line {n}: colorscheme without a silent!/try guard fails on missing schemes"
                ));
            }
        }

        if declares_plugins && !has_plugin_manager {
            warnings.push("plugins declared but no plugin manager initialization found".to_string());
        }

        Ok(ValidationResult::new(errors, warnings, suggestions))
    }

    fn extract_dependencies(&self, content: &str) -> Vec<String> {
        let mut deps = Vec::new();
        if content.contains("plug#begin") || content.contains("Plug '") {
            push_unique(&mut deps, "vim-plug");
        }
        if content.contains("vundle#begin") || content.contains("Vundle") {
            push_unique(&mut deps, "vundle");
        }
        for (re, package) in TOOL_PACKAGES.iter() {
            if re.is_match(content) {
                push_unique(&mut deps, *package);
            }
        }
        deps
    }

    fn summary(&self, content: &str) -> ConfigSummary {
        let line_count = content.lines().count();
        let mut variable_count = 0;
        let mut function_count = 0;
        let mut mapping_count = 0;
        let mut plugin_count = 0;
        let mut features = Vec::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with('"') {
                continue;
            }
            if SET_RE.is_match(trimmed) {
                variable_count += 1;
            } else if MAP_RE.is_match(trimmed) {
                mapping_count += 1;
            } else if PLUGIN_RE.is_match(trimmed) {
                plugin_count += 1;
            } else if FUNCTION_RE.is_match(trimmed) {
                function_count += 1;
            }

            if trimmed.starts_with("autocmd") {
                push_unique(&mut features, "autocommands");
            }
            if trimmed.starts_with("colorscheme") {
                push_unique(&mut features, "colorscheme");
            }
        }

        if plugin_count > 0 {
            push_unique(&mut features, "plugins");
        }
        if mapping_count > 0 {
            push_unique(&mut features, "mappings");
        }
        if function_count > 0 {
            push_unique(&mut features, "custom-functions");
        }

        ConfigSummary {
            description: format!(
                "vim configuration with {variable_count} settings, {mapping_count} mappings, and {plugin_count} plugins"
            ),
            line_count,
            function_count,
            variable_count,
            complex: line_count > 80 || plugin_count > 10,
            features,
        }
    }
}
