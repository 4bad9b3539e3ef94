//! Structural diff collaborator for matcher failure messages.

use std::collections::BTreeSet;

use pretty_assertions::StrComparison;
use serde_json::{Map, Value};
use svelte_mock_core::{canonical_eq, normalize_numbers, UNDEFINED};

/// Options forwarded to a [`DiffFormatter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Show every entry instead of changes with nearby context
    pub expand: bool,
}

/// Renders the difference between an expected and a received value.
pub trait DiffFormatter: Send + Sync {
    /// Human-readable diff, or `None` when there is nothing useful to show.
    fn diff(
        &self,
        expected: Option<&Value>,
        received: Option<&Value>,
        options: &DiffOptions,
    ) -> Option<String>;
}

/// Unchanged keys kept on each side of a changed key in a collapsed diff.
pub const DIFF_CONTEXT_KEYS: usize = 5;

/// Line diff of pretty-printed JSON, rendered by `pretty_assertions`.
///
/// Values of different kinds get a one-line explanation instead of a diff.
/// Without `expand`, objects keep only changed keys plus up to
/// [`DIFF_CONTEXT_KEYS`] unchanged neighbours on either side.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyDiff;

impl DiffFormatter for PrettyDiff {
    fn diff(
        &self,
        expected: Option<&Value>,
        received: Option<&Value>,
        options: &DiffOptions,
    ) -> Option<String> {
        if canonical_eq(expected, received) {
            return None;
        }

        let (expected, received) = match (expected, received) {
            (Some(expected), Some(received)) if kind(expected) == kind(received) => {
                (normalize_numbers(expected), normalize_numbers(received))
            }
            _ => {
                return Some(format!(
                    "Comparing two different types of values. Expected {} but received {}.",
                    kind_of(expected),
                    kind_of(received)
                ))
            }
        };

        let (expected, received) = match (expected, received) {
            (Value::Object(left), Value::Object(right)) if !options.expand => {
                with_context(&left, &right, DIFF_CONTEXT_KEYS)
            }
            pair => pair,
        };

        let left = render(&expected)?;
        let right = render(&received)?;
        Some(StrComparison::new(&left, &right).to_string())
    }
}

/// Pretty JSON, except bare strings which are diffed as their text.
fn render(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        other => serde_json::to_string_pretty(other).ok(),
    }
}

/// Both objects reduced to the changed keys and `context` unchanged keys
/// around each of them, in key order.
fn with_context(
    expected: &Map<String, Value>,
    received: &Map<String, Value>,
    context: usize,
) -> (Value, Value) {
    let keys: BTreeSet<&String> = expected.keys().chain(received.keys()).collect();
    let keys: Vec<&String> = keys.into_iter().collect();
    let changed: Vec<usize> = keys
        .iter()
        .enumerate()
        .filter(|(_, key)| !canonical_eq(expected.get(key.as_str()), received.get(key.as_str())))
        .map(|(index, _)| index)
        .collect();

    let kept: BTreeSet<&str> = keys
        .iter()
        .enumerate()
        .filter(|(index, _)| changed.iter().any(|c| c.abs_diff(*index) <= context))
        .map(|(_, key)| key.as_str())
        .collect();

    let pick = |side: &Map<String, Value>| -> Value {
        Value::Object(
            side.iter()
                .filter(|(key, _)| kept.contains(key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    };

    (pick(expected), pick(received))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn kind_of(value: Option<&Value>) -> &'static str {
    value.map_or(UNDEFINED, kind)
}

#[cfg(test)]
pub(crate) fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
