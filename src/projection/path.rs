//! Dotted field paths

use std::fmt;

use serde_json::Value;

/// A dot-delimited address into a JSON document, e.g. `name.common`
///
/// Segments are taken literally: `a..b` and `a.` contain an empty segment,
/// which only resolves against an object that really has an empty key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            segments: raw.split('.').map(str::to_string).collect(),
        }
    }

    /// The path exactly as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walk the path through `value`
    ///
    /// Objects are entered by key, arrays by a decimal index segment. Any
    /// miss, or a scalar reached before the last segment, yields `None`.
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(value, |current, segment| step(current, segment))
    }
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
