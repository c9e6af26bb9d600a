//! Format-specific configuration parsers.
//!
//! Each configuration kind maps to one [`ConfigParser`] implementation
//! selected through the [`ParserRegistry`]. Parsers are pure functions of
//! the text content: no I/O, no state between calls.

mod deps;
mod generic;
mod git;
mod shell;
mod vim;

pub use generic::GenericParser;
pub use git::GitConfigParser;
pub use shell::ShellParser;
pub use vim::VimParser;

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::ParseError;
use crate::model::ConfigKind;

/// A parsed scalar value with shell-style coercion applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Literal `true` / `false`.
    Bool(bool),
    /// Fully numeric integer token.
    Int(i64),
    /// Fully numeric token with a fractional part.
    Float(f64),
    /// Everything else, quotes stripped.
    Text(String),
}

impl Value {
    /// Coerce a raw token: strip surrounding quotes, then map `true`/`false`
    /// to booleans and fully numeric tokens to numbers; anything else stays
    /// text.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        let unquoted = strip_quotes(raw.trim());
        match unquoted {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }
        if let Ok(n) = unquoted.parse::<i64>() {
            return Self::Int(n);
        }
        if let Ok(f) = unquoted.parse::<f64>() {
            return Self::Float(f);
        }
        Self::Text(unquoted.to_string())
    }

    /// The textual form of this value, for summaries and dependency tables.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Strip one matching pair of surrounding single or double quotes.
#[must_use]
pub(crate) fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 {
        let stripped = s
            .strip_prefix('"')
            .and_then(|r| r.strip_suffix('"'))
            .or_else(|| s.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')));
        if let Some(inner) = stripped {
            return inner;
        }
    }
    s
}

/// Validation outcome for one configuration file.
///
/// Invariant: [`is_valid`](Self::is_valid) is `true` exactly when
/// [`errors`](Self::errors) is empty — warnings and suggestions never fail
/// validity. Enforced by [`ValidationResult::new`].
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// Whether the content is syntactically valid.
    pub is_valid: bool,
    /// True syntax errors.
    pub errors: Vec<String>,
    /// Risky but not invalid constructs.
    pub warnings: Vec<String>,
    /// Style and robustness improvements.
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    /// Build a result, deriving validity from the error list.
    #[must_use]
    pub fn new(errors: Vec<String>, warnings: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            suggestions,
        }
    }

    /// A valid result with no diagnostics at all.
    #[must_use]
    pub fn clean() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

/// Structured output of one parse call.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedConfig {
    /// Per-format structured payload (settings, sections, mappings, …).
    pub data: serde_json::Value,
    /// Variable name → coerced value.
    pub variables: BTreeMap<String, Value>,
    /// Import/source targets, quotes stripped.
    pub imports: Vec<String>,
    /// Extracted comment lines, markers stripped.
    pub comments: Vec<String>,
    /// Validation diagnostics for the same content.
    pub validation: ValidationResult,
}

/// Purely descriptive summary of one configuration file.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    /// Free-text description.
    pub description: String,
    /// Total line count.
    pub line_count: usize,
    /// Number of function or command definitions.
    pub function_count: usize,
    /// Number of variables or settings.
    pub variable_count: usize,
    /// Whether the file looks complex enough to warrant review.
    pub complex: bool,
    /// Detected feature tags (e.g. `"aliases"`, `"plugins"`).
    pub features: Vec<String>,
}

/// A format-specific parser.
///
/// All four operations are pure functions of the text content; none perform
/// I/O. `parse` and `validate` fail only when the parser cannot process the
/// input at all — content that parses but is syntactically wrong surfaces
/// as validation *errors*, not as a [`ParseError`].
pub trait ConfigParser: Send + Sync + std::fmt::Debug {
    /// Turn raw text into structured data.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the content cannot be processed at all.
    fn parse(&self, content: &str) -> Result<ParsedConfig, ParseError>;

    /// Validate raw text, producing errors, warnings, and suggestions.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the content cannot be processed at all.
    fn validate(&self, content: &str) -> Result<ValidationResult, ParseError>;

    /// Extract the package names this configuration depends on,
    /// deduplicated in first-seen order.
    fn extract_dependencies(&self, content: &str) -> Vec<String>;

    /// Produce a human-readable summary of the content.
    fn summary(&self, content: &str) -> ConfigSummary;
}

/// Kind-keyed parser registry.
///
/// One parser instance per configuration kind, created once at construction
/// and reused for the life of the registry. Kinds without a dedicated
/// format parser fall back to the [`GenericParser`], which still extracts
/// comments, line counts, and install-command dependencies.
#[derive(Debug)]
pub struct ParserRegistry {
    parsers: HashMap<ConfigKind, Box<dyn ConfigParser>>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserRegistry {
    /// Build the registry with one parser per kind.
    #[must_use]
    pub fn new() -> Self {
        let mut parsers: HashMap<ConfigKind, Box<dyn ConfigParser>> = HashMap::new();
        for kind in ConfigKind::ALL {
            let parser: Box<dyn ConfigParser> = match kind {
                ConfigKind::Bash | ConfigKind::Zsh => Box::new(ShellParser::new(kind)),
                ConfigKind::Vim => Box::new(VimParser::new()),
                ConfigKind::Git => Box::new(GitConfigParser::new()),
                ConfigKind::Ssh | ConfigKind::VsCode | ConfigKind::Systemd | ConfigKind::Custom => {
                    Box::new(GenericParser::new(kind))
                }
            };
            parsers.insert(kind, parser);
        }
        Self { parsers }
    }

    /// The parser for `kind`.
    ///
    /// Every kind has an entry; unknown formats resolve to the generic
    /// fallback inserted at construction.
    #[must_use]
    pub fn parser_for(&self, kind: ConfigKind) -> &dyn ConfigParser {
        self.parsers
            .get(&kind)
            .map_or(&FALLBACK as &dyn ConfigParser, AsRef::as_ref)
    }
}

/// Shared fallback used only if a kind were somehow absent from the map.
static FALLBACK: GenericParser = GenericParser::custom();

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Value coercion
    // -----------------------------------------------------------------------

    #[test]
    fn coerce_booleans() {
        assert_eq!(Value::coerce("true"), Value::Bool(true));
        assert_eq!(Value::coerce("false"), Value::Bool(false));
    }

    #[test]
    fn coerce_numbers() {
        assert_eq!(Value::coerce("42"), Value::Int(42));
        assert_eq!(Value::coerce("-7"), Value::Int(-7));
        assert_eq!(Value::coerce("3.5"), Value::Float(3.5));
    }

    #[test]
    fn coerce_strips_quotes() {
        assert_eq!(Value::coerce("\"bar\""), Value::Text("bar".to_string()));
        assert_eq!(Value::coerce("'baz'"), Value::Text("baz".to_string()));
    }

    #[test]
    fn coerce_quoted_number_is_still_numeric() {
        // Quote stripping happens before coercion, matching shell semantics
        // where quoting does not change the stored value.
        assert_eq!(Value::coerce("\"10\""), Value::Int(10));
    }

    #[test]
    fn coerce_partial_number_stays_text() {
        assert_eq!(
            Value::coerce("8080/tcp"),
            Value::Text("8080/tcp".to_string())
        );
    }

    #[test]
    fn strip_quotes_requires_matching_pair() {
        assert_eq!(strip_quotes("\"open"), "\"open");
        assert_eq!(strip_quotes("'a\""), "'a\"");
        assert_eq!(strip_quotes("\"\""), "");
    }

    // -----------------------------------------------------------------------
    // ValidationResult invariant
    // -----------------------------------------------------------------------

    #[test]
    fn validity_tracks_error_list() {
        let ok = ValidationResult::new(Vec::new(), vec!["w".into()], vec!["s".into()]);
        assert!(ok.is_valid);

        let bad = ValidationResult::new(vec!["e".into()], Vec::new(), Vec::new());
        assert!(!bad.is_valid);
    }

    // -----------------------------------------------------------------------
    // Registry
    // -----------------------------------------------------------------------

    #[test]
    fn registry_covers_every_kind() {
        let registry = ParserRegistry::new();
        for kind in ConfigKind::ALL {
            // parser_for must never fall through to the static fallback for
            // a known kind; summaries on empty input prove dispatch works.
            let summary = registry.parser_for(kind).summary("");
            assert_eq!(summary.line_count, 0);
        }
    }

    #[test]
    fn registry_reuses_instances() {
        let registry = ParserRegistry::new();
        let a = std::ptr::from_ref(registry.parser_for(ConfigKind::Bash));
        let b = std::ptr::from_ref(registry.parser_for(ConfigKind::Bash));
        assert_eq!(a, b, "same instance must be returned per kind");
    }
}
