//! Loading, saving and structural helpers for JSON documents.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{AugmentError, Result};

/// Reads and parses the JSON document at `path`.
pub fn load(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|source| AugmentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = serde_json::from_str(&text).map_err(|source| AugmentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded document");
    Ok(doc)
}

/// Writes `doc` to `path` as pretty-printed JSON with a trailing newline.
///
/// The document is fully serialized before the file is opened, so a
/// serialization failure never leaves a truncated output behind.
pub fn save(path: &Path, doc: &Value) -> Result<()> {
    let mut text = serde_json::to_string_pretty(doc).map_err(AugmentError::Serialize)?;
    text.push('\n');
    fs::write(path, &text).map_err(|source| AugmentError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "saved document");
    Ok(())
}

/// Returns the object stored under `key`, creating it (or replacing a
/// non-object value) when needed.
pub(crate) fn ensure_object<'a>(
    parent: &'a mut Map<String, Value>,
    key: &str,
) -> &'a mut Map<String, Value> {
    let slot = parent
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        debug!(key, "replacing non-object container");
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot holds an object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ensure_object_creates_missing_keys() {
        let mut root = Map::new();
        ensure_object(&mut root, "components").insert("x".into(), json!(1));
        assert_eq!(Value::Object(root), json!({ "components": { "x": 1 } }));
    }

    #[test]
    fn ensure_object_keeps_existing_entries() {
        let Value::Object(mut root) = json!({ "components": { "schemas": {} } }) else {
            panic!("expected object");
        };
        let components = ensure_object(&mut root, "components");
        assert!(components.contains_key("schemas"));
    }

    #[test]
    fn ensure_object_replaces_scalars() {
        let Value::Object(mut root) = json!({ "components": "broken" }) else {
            panic!("expected object");
        };
        assert!(ensure_object(&mut root, "components").is_empty());
        assert!(root["components"].is_object());
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, AugmentError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn save_writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        save(&path, &json!({ "openapi": "3.0.1" })).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"openapi\": \"3.0.1\"\n}\n");
        assert_eq!(load(&path).unwrap(), json!({ "openapi": "3.0.1" }));
    }
}
