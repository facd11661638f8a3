//! Repair of malformed `enum` declarations.
//!
//! Some upstream schemas declare an enumeration as a single comma-joined
//! string (`["A,B,C"]`) instead of one entry per value.

use serde_json::Value;
use tracing::debug;

/// Splits comma-joined entries and removes duplicates in every `enum` array
/// of `doc`, walking the tree depth-first.
///
/// Returns how many `enum` arrays changed. A second pass always returns 0.
pub fn normalize_enums(doc: &mut Value) -> usize {
    let mut changed = 0;
    walk(doc, "", &mut changed);
    changed
}

fn walk(node: &mut Value, location: &str, changed: &mut usize) {
    match node {
        Value::Object(map) => {
            if let Some(Value::Array(values)) = map.get_mut("enum") {
                if normalize_values(values) {
                    *changed += 1;
                    debug!(location, values = values.len(), "enum normalized");
                }
            }
            for (key, child) in map.iter_mut() {
                walk(child, &format!("{location}/{key}"), changed);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter_mut().enumerate() {
                walk(item, &format!("{location}/{index}"), changed);
            }
        }
        _ => {}
    }
}

/// Rewrites `values` in place; returns whether anything changed.
fn normalize_values(values: &mut Vec<Value>) -> bool {
    let mut normalized: Vec<Value> = Vec::with_capacity(values.len());

    for value in values.iter() {
        match value {
            Value::String(joined) if joined.contains(',') => {
                let pieces = joined
                    .split(',')
                    .map(str::trim)
                    .filter(|piece| !piece.is_empty());
                for piece in pieces {
                    push_unique(&mut normalized, Value::String(piece.to_string()));
                }
            }
            other => push_unique(&mut normalized, other.clone()),
        }
    }

    if normalized == *values {
        return false;
    }
    *values = normalized;
    true
}

fn push_unique(values: &mut Vec<Value>, value: Value) {
    if !values.contains(&value) {
        values.push(value);
    }
}
