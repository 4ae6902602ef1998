//! Typed coercion of raw input strings.
//!
//! Coercion never fails. A malformed value degrades to the documented
//! default and the discarded parse error is handed back as a warning so the
//! caller decides how to surface it.

use std::collections::BTreeMap;

/// A coerced value plus the parse error that was discarded, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coerced<T> {
    pub value: T,
    pub warning: Option<String>,
}

impl<T> Coerced<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }
}

/// Parse `raw` with `parser`, falling back to `default`.
///
/// Absent or empty input yields the default without a warning. A parse
/// failure yields the default with the parser's error message attached.
pub fn parse_with_default<T, E, F>(raw: Option<&str>, parser: F, default: T) -> Coerced<T>
where
    F: FnOnce(&str) -> Result<T, E>,
    E: std::fmt::Display,
{
    let Some(raw) = raw.filter(|value| !value.is_empty()) else {
        return Coerced::clean(default);
    };

    match parser(raw) {
        Ok(value) => Coerced::clean(value),
        Err(e) => Coerced {
            value: default,
            warning: Some(e.to_string()),
        },
    }
}

/// Case-insensitive `"true"` test. Anything else is `false`.
pub fn parse_bool(raw: &str) -> Result<bool, std::convert::Infallible> {
    Ok(raw.eq_ignore_ascii_case("true"))
}

pub fn parse_int(raw: &str) -> Result<i64, std::num::ParseIntError> {
    raw.trim().parse::<i64>()
}

/// Parse a JSON object of header overrides.
///
/// String values are taken as-is; other scalar values use their JSON
/// rendering (`5`, `true`). Anything that is not an object is rejected.
pub fn parse_headers(raw: &str) -> Result<BTreeMap<String, String>, String> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    let serde_json::Value::Object(object) = value else {
        return Err(format!("expected a JSON object, got: {}", raw));
    };

    Ok(object
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (name, value)
        })
        .collect())
}

/// Split a comma-separated tag list. Entries are passed through verbatim.
pub fn split_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}
