//! Directive comment recognition and parsing.
//!
//! A directive has the form:
//! ```text
//! # ignoregen <name>[ <json-options>]
//! ```

use crate::error::DirectiveError;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Marker and keyword, followed by a mandatory non-empty remainder.
static DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# ignoregen .+$").expect("Invalid directive regex"));

/// Options a directive or a config layer may override.
///
/// Every field is optional; an unset field falls through to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialOptions {
    /// Base URL that template names are resolved against
    #[serde(default)]
    pub src: Option<String>,
}

impl PartialOptions {
    pub fn with_src(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
        }
    }

    /// Overwrite every field that is set in `other`.
    pub fn merge(&mut self, other: &PartialOptions) {
        if let Some(src) = &other.src {
            self.src = Some(src.clone());
        }
    }
}

/// A parsed directive comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Template identifier, e.g. `node`
    pub name: String,
    /// Inline option overrides
    pub options: PartialOptions,
}

/// Returns `true` if the line is a directive comment.
///
/// # Example
/// ```
/// use ignoregen_blocks::directive::is_directive;
///
/// assert!(is_directive("# ignoregen env"));
/// assert!(!is_directive("# ignoregen"));
/// assert!(!is_directive("#ignoregen env"));
/// ```
pub fn is_directive(line: &str) -> bool {
    DIRECTIVE_REGEX.is_match(line)
}

/// Parses a directive comment into its template name and inline options.
///
/// The line is split on single spaces. The third token is the name and every
/// token after it is concatenated, without separators, into the options JSON.
/// An empty remainder or `null` means no overrides.
///
/// # Errors
/// - [`DirectiveError::NotADirective`] if the line fails [`is_directive`]
/// - [`DirectiveError::MissingName`] if the name token is empty
/// - [`DirectiveError::MalformedOptions`] if the options are not a JSON object
///
/// # Example
/// ```
/// use ignoregen_blocks::directive::parse_directive;
///
/// let directive = parse_directive(r#"# ignoregen env {"src": "https://example.com/"}"#).unwrap();
/// assert_eq!(directive.name, "env");
/// assert_eq!(directive.options.src.as_deref(), Some("https://example.com/"));
/// ```
pub fn parse_directive(line: &str) -> Result<Directive, DirectiveError> {
    if !is_directive(line) {
        return Err(DirectiveError::NotADirective);
    }

    let mut tokens = line.split(' ').skip(2);
    let name = tokens.next().unwrap_or_default();
    if name.is_empty() {
        return Err(DirectiveError::MissingName);
    }

    let raw_options: String = tokens.collect();
    let options = parse_options(&raw_options)?;

    Ok(Directive {
        name: name.to_string(),
        options,
    })
}

fn parse_options(raw: &str) -> Result<PartialOptions, DirectiveError> {
    if raw.is_empty() {
        return Ok(PartialOptions::default());
    }

    let malformed = |message: String| DirectiveError::MalformedOptions { message };

    let value: Value = serde_json::from_str(raw).map_err(|e| malformed(e.to_string()))?;
    match value {
        Value::Null => Ok(PartialOptions::default()),
        Value::Object(_) => serde_json::from_value(value).map_err(|e| malformed(e.to_string())),
        other => Err(malformed(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
