use std::collections::HashMap;

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::label::Message;

const MAX_CATALOG_ENTRIES: usize = 10_000;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 16 * 1024;
const MAX_EXPANDED_BYTES: usize = 64 * 1024;

fn is_valid_key(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
}

#[derive(Debug, Error)]
pub enum CatalogParseError {
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("top level of a catalog must be a mapping")]
    NotAMapping,

    #[error("invalid key `{0}` (allowed: [A-Za-z0-9][A-Za-z0-9_.-]*, max {max} bytes)", max = MAX_KEY_BYTES)]
    InvalidKey(String),

    #[error("duplicate key `{0}`")]
    DuplicateKey(String),

    #[error("value for key `{0}` must be a string or a nested mapping")]
    NotAString(String),

    #[error("value for key `{0}` is too long (max {max} bytes)", max = MAX_VALUE_BYTES)]
    ValueTooLong(String),

    #[error("too many entries (max {max})", max = MAX_CATALOG_ENTRIES)]
    TooManyEntries,
}

fn is_blank_document(src: &str) -> bool {
    src.lines().map(str::trim).all(|l| l.is_empty() || l.starts_with('#'))
}

/// One locale's translations, keyed by dot-delimited path.
///
/// Catalog sources are YAML. Nested mappings are flattened, so
///
/// ```yaml
/// contact:
///   email:
///     title: "E-mail"
/// ```
///
/// yields the key `contact.email.title`. Values may contain `{name}`
/// placeholders; `{{` and `}}` produce literal braces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a YAML catalog, flattening nested mappings into dotted keys.
    pub fn parse(src: &str) -> Result<Self, CatalogParseError> {
        let mut cat = Self::new();
        if is_blank_document(src) {
            return Ok(cat);
        }
        let root: Value = serde_yaml::from_str(src)?;
        match root {
            Value::Null => {}
            Value::Mapping(map) => cat.flatten_into("", map)?,
            _ => return Err(CatalogParseError::NotAMapping),
        }
        Ok(cat)
    }

    fn flatten_into(&mut self, prefix: &str, map: Mapping) -> Result<(), CatalogParseError> {
        for (k, v) in map {
            let Some(segment) = k.as_str() else {
                return Err(CatalogParseError::InvalidKey(format!("{prefix}{k:?}")));
            };
            let key = if prefix.is_empty() {
                segment.to_string()
            } else {
                format!("{prefix}.{segment}")
            };
            if !is_valid_key(&key) || key.len() > MAX_KEY_BYTES {
                return Err(CatalogParseError::InvalidKey(key));
            }

            match v {
                Value::Mapping(nested) => self.flatten_into(&key, nested)?,
                Value::String(val) => {
                    if val.len() > MAX_VALUE_BYTES {
                        return Err(CatalogParseError::ValueTooLong(key));
                    }
                    if self.entries.contains_key(&key) {
                        return Err(CatalogParseError::DuplicateKey(key));
                    }
                    if self.entries.len() >= MAX_CATALOG_ENTRIES {
                        return Err(CatalogParseError::TooManyEntries);
                    }
                    self.entries.insert(key, val);
                }
                _ => return Err(CatalogParseError::NotAString(key)),
            }
        }
        Ok(())
    }

    /// Look up `msg.id` and substitute its arguments. `None` if the key is absent.
    pub fn format_message(&self, msg: &Message) -> Option<String> {
        let tmpl = self.get(msg.id.as_ref())?;
        Some(apply_placeholders(tmpl, msg))
    }
}

/// Output buffer that silently stops growing at `MAX_EXPANDED_BYTES`.
struct Expansion {
    out: String,
}

impl Expansion {
    fn with_capacity(n: usize) -> Self {
        Self {
            out: String::with_capacity(n.min(MAX_EXPANDED_BYTES)),
        }
    }

    fn push(&mut self, s: &str) {
        let remaining = MAX_EXPANDED_BYTES.saturating_sub(self.out.len());
        if s.len() <= remaining {
            self.out.push_str(s);
            return;
        }
        let mut end = remaining;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        self.out.push_str(&s[..end]);
    }

    fn is_full(&self) -> bool {
        self.out.len() >= MAX_EXPANDED_BYTES
    }
}

fn is_brace(c: char) -> bool {
    c == '{' || c == '}'
}

fn apply_placeholders(tmpl: &str, msg: &Message) -> String {
    if !tmpl.contains(is_brace) {
        return tmpl.to_string();
    }

    let mut out = Expansion::with_capacity(tmpl.len() + 8);
    let mut rest = tmpl;
    while let Some(pos) = rest.find(is_brace) {
        out.push(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push(&tail[..1]);
            rest = &tail[2..];
        } else if tail.starts_with('}') {
            out.push("}");
            rest = &tail[1..];
        } else if let Some(end) = tail[1..].find('}') {
            let name = tail[1..=end].trim();
            match msg.lookup_arg(name) {
                Some(v) if !name.is_empty() => out.push(&v.to_string()),
                // Unknown placeholders stay visible.
                _ => out.push(&tail[..end + 2]),
            }
            rest = &tail[end + 2..];
        } else {
            // No closing brace: the rest is literal.
            out.push(tail);
            rest = "";
        }

        if out.is_full() {
            return out.out;
        }
    }
    out.push(rest);
    out.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expand(tmpl: &str) -> String {
        apply_placeholders(tmpl, &Message::new("k").arg("name", "Ana"))
    }

    #[test]
    fn parse_nested_yaml_and_lookup() {
        let src = r#"
nav:
  home: "Início"
contact:
  email:
    title: "E-mail"
home.greeting: "Olá, {name}!"
"#;

        let cat = Catalog::parse(src).unwrap();
        assert_eq!(cat.len(), 3);
        assert_eq!(cat.get("nav.home"), Some("Início"));
        assert_eq!(cat.get("contact.email.title"), Some("E-mail"));

        let s = cat
            .format_message(&Message::new("home.greeting").arg("name", "Ana"))
            .unwrap();
        assert_eq!(s, "Olá, Ana!");
    }

    #[test]
    fn empty_document_is_empty_catalog() {
        assert!(Catalog::parse("").unwrap().is_empty());
        assert!(Catalog::parse("# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_mapping_root() {
        let err = Catalog::parse("- a\n- b\n").unwrap_err();
        assert!(matches!(err, CatalogParseError::NotAMapping));
    }

    #[test]
    fn rejects_non_string_values() {
        let err = Catalog::parse("footer:\n  year: 2024\n").unwrap_err();
        assert!(matches!(err, CatalogParseError::NotAString(k) if k == "footer.year"));
    }

    #[test]
    fn rejects_bad_keys() {
        let err = Catalog::parse("\"bad key\": nope\n").unwrap_err();
        assert!(matches!(err, CatalogParseError::InvalidKey(_)));

        let long = format!("{}: x\n", "a".repeat(MAX_KEY_BYTES + 1));
        let err = Catalog::parse(&long).unwrap_err();
        assert!(matches!(err, CatalogParseError::InvalidKey(_)));
    }

    #[test]
    fn rejects_flattened_collisions() {
        let src = "a.b: one\na:\n  b: two\n";
        let err = Catalog::parse(src).unwrap_err();
        assert!(matches!(err, CatalogParseError::DuplicateKey(k) if k == "a.b"));
    }

    #[test]
    fn escaped_braces() {
        assert_eq!(expand("Hello, {{name}}!"), "Hello, {name}!");
        assert_eq!(expand("{{{name}}}"), "{Ana}");
        assert_eq!(expand("}}"), "}");
        assert_eq!(expand("{{"), "{");
    }

    #[test]
    fn unknown_and_unclosed_placeholders_are_literal() {
        assert_eq!(expand("Hi {who}"), "Hi {who}");
        assert_eq!(expand("Hi {}"), "Hi {}");
        assert_eq!(expand("Hello, {name"), "Hello, {name");
    }

    #[test]
    fn argument_kinds_are_stringified() {
        let msg = Message::new("k")
            .arg("n", 3)
            .arg("x", 2.5)
            .arg("b", true);
        assert_eq!(apply_placeholders("{n}/{x}/{b}", &msg), "3/2.5/true");
    }

    #[test]
    fn placeholder_output_is_limited() {
        let msg = Message::new("k").arg("name", "a".repeat(MAX_EXPANDED_BYTES * 2));
        let s = apply_placeholders("{name}{name}{name}", &msg);
        assert_eq!(s.len(), MAX_EXPANDED_BYTES);
    }
}
