//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use javelin_java::{Modifier, TypeName, TypeParam, Visibility};
use miette::SourceSpan;

use crate::{Result, error::SourceContext, type_syntax};

/// Parsing and validation context that carries source information.
///
/// Holds the shared source plus the path of declarations being validated,
/// so diagnostics can say where a bad name lives.
///
/// ```ignore
/// let ctx = ParseContext::new(src, "javelin.toml");
/// ctx.validate_name("UserService", "type")?;
///
/// let nested = ctx.push("UserService").push("findAll");
/// nested.validate_name("id", "parameter")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Declaration path, e.g. ["UserService", "findAll"]
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// The current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// A context description for error messages, e.g. "field in 'UserService'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a usable Java identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a dotted package name. The empty package is allowed.
    pub fn validate_package(&self, package: &str) -> Result<()> {
        if package.is_empty() {
            return Ok(());
        }
        for segment in package.split('.') {
            if is_java_keyword(segment) {
                return Err(self.source.reserved_keyword_error(
                    segment,
                    "package",
                    find_value_span(self.src(), package),
                ));
            }
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    package,
                    "package",
                    reason,
                    find_value_span(self.src(), package),
                ));
            }
        }
        Ok(())
    }

    /// Parse a type string, reporting failures against its position in the source.
    pub fn type_name(&self, ty: &str, vars: &[String], kind: &str) -> Result<TypeName> {
        type_syntax::parse_type(ty, vars).map_err(|reason| {
            self.source.invalid_type_error(
                ty,
                self.context_for(kind),
                reason,
                find_value_span(self.src(), ty),
            )
        })
    }

    /// Parse a type parameter declaration.
    pub fn type_param(&self, param: &str, vars: &[String]) -> Result<TypeParam> {
        let parsed = type_syntax::parse_type_param(param, vars).map_err(|reason| {
            self.source.invalid_type_error(
                param,
                self.context_for("type parameter"),
                reason,
                find_value_span(self.src(), param),
            )
        })?;
        self.validate_name(&parsed.name, "type parameter")?;
        Ok(parsed)
    }

    pub fn visibility(&self, value: Option<&str>, default: Visibility) -> Result<Visibility> {
        match value {
            None => Ok(default),
            Some(value) => value.parse().map_err(|message: String| {
                self.source.validation_error_at(
                    format!(
                        "{}; expected public, protected, private or package",
                        message
                    ),
                    find_value_span(self.src(), value),
                )
            }),
        }
    }

    pub fn modifiers(&self, values: &[String]) -> Result<Vec<Modifier>> {
        values
            .iter()
            .map(|value| {
                value.parse().map_err(|message: String| {
                    self.source
                        .validation_error_at(message, find_value_span(self.src(), value))
                })
            })
            .collect()
    }

    /// A validation error pointing at a declaration by name.
    pub fn error_at_name(&self, name: &str, message: impl Into<String>) -> Box<crate::Error> {
        self.source
            .validation_error_at(message, self.find_span(name))
    }

    /// A validation error pointing at a quoted value.
    pub fn error_at_value(&self, value: &str, message: impl Into<String>) -> Box<crate::Error> {
        self.source
            .validation_error_at(message, find_value_span(self.src(), value))
    }

    /// Span of the first `key = ...` (TOML) or `"key": ...` (JSON) entry.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        self.find_key_span_from(key, 0, 0)
    }

    /// Span of the `nth` (zero-based) `key` entry at or after byte offset `from`.
    pub fn find_key_span_from(&self, key: &str, from: usize, nth: usize) -> Option<SourceSpan> {
        let src = self.src();
        let rest = src.get(from..)?;
        let mut starts: Vec<usize> = [format!("{key} ="), format!("{key}="), format!("\"{key}\":")]
            .iter()
            .flat_map(|pattern| rest.match_indices(pattern.as_str()).map(|(pos, _)| pos))
            .filter(|&pos| {
                // Reject matches that are the tail of a longer key.
                rest[..pos]
                    .chars()
                    .next_back()
                    .is_none_or(|c| !(c.is_alphanumeric() || c == '_'))
            })
            .map(|pos| {
                let start = if rest[pos..].starts_with('"') { pos + 1 } else { pos };
                from + start
            })
            .collect();
        starts.sort_unstable();
        starts.dedup();
        starts
            .get(nth)
            .map(|&start| SourceSpan::from((start, key.len())))
    }
}

/// Java reserved words that cannot be used as identifiers, including the
/// literals `true`, `false` and `null`.
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "_",
    // Literals
    "true", "false", "null",
];

pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Find the span of a declared name in the source.
///
/// Matches `name = "value"` (TOML, either quote style, with or without
/// spaces) and `"name": "value"` (JSON).
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("name = \"{}\"", name),
        format!("name = '{}'", name),
        format!("name=\"{}\"", name),
        format!("\"name\": \"{}\"", name),
        format!("\"name\":\"{}\"", name),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // The name ends right before the closing quote.
            let start = pos + pattern.len() - name.len() - 1;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Find the span of a quoted string value, such as a type string.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    ['"', '\''].into_iter().find_map(|quote| {
        let pattern = format!("{quote}{value}{quote}");
        src.find(&pattern)
            .map(|pos| SourceSpan::from((pos + 1, value.len())))
    })
}

/// Check a name against Java identifier rules.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
    }

    if is_java_keyword(name) {
        return Some("name is a Java reserved keyword");
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return Some("name must contain only letters, digits, '_' and '$'");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("hello").is_none());
        assert!(validate_identifier("UserService").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("$proxy").is_none());
        assert!(validate_identifier("arg1").is_none());
        assert!(validate_identifier("MAX_SIZE").is_none());
    }

    #[test]
    fn test_reserved_keywords() {
        for keyword in ["class", "int", "new", "this", "super", "null", "true", "_"] {
            assert!(validate_identifier(keyword).is_some(), "{keyword}");
            assert!(is_java_keyword(keyword), "{keyword}");
        }
        assert!(!is_java_keyword("record"));
        assert!(!is_java_keyword("String"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("my-name").is_some());
        assert!(validate_identifier("hello world").is_some());
        assert!(validate_identifier("a.b").is_some());
    }

    #[test]
    fn test_find_name_span_toml() {
        let src = r#"[[types]]
kind = "class"
name = "Widget""#;
        let span = find_name_span(src, "Widget").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Widget");
    }

    #[test]
    fn test_find_name_span_json() {
        let src = r#"{"types": [{"kind": "enum", "name": "Color"}]}"#;
        let span = find_name_span(src, "Color").unwrap();
        assert_eq!(span.offset(), 37);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_find_name_span_requires_exact_match() {
        let src = r#"name = "Widgets""#;
        assert!(find_name_span(src, "Widget").is_none());
    }

    #[test]
    fn test_find_value_span() {
        let src = r#"type = 'java.util.List<'"#;
        let span = find_value_span(src, "java.util.List<").unwrap();
        assert_eq!(span.offset(), 8);
        assert_eq!(span.len(), 15);
    }

    #[test]
    fn test_context_for_nested_path() {
        let ctx = ParseContext::new("", "javelin.toml");
        assert_eq!(ctx.context_for("type"), "type");
        let nested = ctx.push("Outer").push("Inner");
        assert_eq!(nested.context_for("field"), "field in 'Outer.Inner'");
    }

    #[test]
    fn test_find_key_span() {
        let ctx = ParseContext::new("body = \"x\"\nthis_args = []", "javelin.toml");
        let span = ctx.find_key_span("this_args").unwrap();
        assert_eq!(span.offset(), 11);

        let ctx = ParseContext::new(r#"{"this_args": []}"#, "javelin.json");
        let span = ctx.find_key_span("this_args").unwrap();
        assert_eq!(span.offset(), 2);
        assert_eq!(span.len(), 9);
    }

    #[test]
    fn test_find_key_span_from_skips_earlier_entries() {
        let src = "super_this_args = 1\nthis_args = [\"a\"]\nthis_args=[\"b\"]\nthis_args = []";
        let ctx = ParseContext::new(src, "javelin.toml");
        let first = ctx.find_key_span_from("this_args", 0, 0).unwrap();
        assert_eq!(first.offset(), 20);
        let second = ctx.find_key_span_from("this_args", 0, 1).unwrap();
        assert_eq!(second.offset(), 38);
        let after_first = ctx.find_key_span_from("this_args", 21, 1).unwrap();
        assert_eq!(after_first.offset(), src.rfind("this_args").unwrap());
        assert!(ctx.find_key_span_from("this_args", 0, 3).is_none());
    }

    #[test]
    fn test_validate_package() {
        let ctx = ParseContext::new("package = \"com.example\"", "javelin.toml");
        assert!(ctx.validate_package("com.example").is_ok());
        assert!(ctx.validate_package("").is_ok());
        assert!(matches!(
            *ctx.validate_package("com.new.things").unwrap_err(),
            crate::Error::ReservedKeyword { .. }
        ));
        assert!(matches!(
            *ctx.validate_package("com..example").unwrap_err(),
            crate::Error::InvalidIdentifier { .. }
        ));
    }
}
