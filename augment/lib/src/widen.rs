//! Widening of under-declared enumerations.
//!
//! NiFi's `ProcessorDTO.state` lists fewer values than the service actually
//! reports; `physicalState` on the same schema carries the full set.

use serde_json::{Map, Value};
use tracing::debug;

/// Copies the allowed values of one property onto a sibling property.
#[derive(Debug, Clone, Copy)]
pub struct EnumWidening {
    /// Schema name under `components.schemas` or `definitions`.
    pub schema: &'static str,
    pub source: &'static str,
    pub target: &'static str,
    /// Values used when the source property declares no `enum`.
    pub fallback: &'static [&'static str],
}

/// `ProcessorDTO.state` receives the values of `ProcessorDTO.physicalState`.
pub const PROCESSOR_STATE: EnumWidening = EnumWidening {
    schema: "ProcessorDTO",
    source: "physicalState",
    target: "state",
    fallback: &[
        "RUNNING", "STOPPED", "DISABLED", "STARTING", "STOPPING", "RUN_ONCE",
    ],
};

/// Applies `widening` to `doc`; returns whether the target was rewritten.
///
/// An absent schema or target property is skipped silently.
pub fn widen_enum(doc: &mut Value, widening: &EnumWidening) -> bool {
    let Some(schema) = find_schema(doc, widening.schema) else {
        debug!(schema = widening.schema, "schema not present; skipping");
        return false;
    };
    let Some(properties) = schema.get_mut("properties").and_then(Value::as_object_mut) else {
        debug!(schema = widening.schema, "schema has no properties; skipping");
        return false;
    };

    let values = match properties
        .get(widening.source)
        .and_then(|property| property.get("enum"))
        .and_then(Value::as_array)
    {
        Some(values) => values.clone(),
        None => {
            debug!(property = widening.source, "no source enum; using fallback values");
            widening
                .fallback
                .iter()
                .map(|value| Value::String((*value).to_string()))
                .collect()
        }
    };

    let Some(target) = properties
        .get_mut(widening.target)
        .and_then(Value::as_object_mut)
    else {
        debug!(property = widening.target, "target property not present; skipping");
        return false;
    };

    debug!(
        schema = widening.schema,
        property = widening.target,
        values = values.len(),
        "enum widened"
    );
    target.insert("enum".to_string(), Value::Array(values));
    true
}

/// Finds `name` under OpenAPI 3 `components.schemas`, else Swagger 2
/// `definitions`.
fn find_schema<'a>(doc: &'a mut Value, name: &str) -> Option<&'a mut Map<String, Value>> {
    let in_components = doc
        .get("components")
        .and_then(|components| components.get("schemas"))
        .and_then(|schemas| schemas.get(name))
        .is_some_and(Value::is_object);

    let container = if in_components {
        doc.get_mut("components")?.get_mut("schemas")?
    } else {
        doc.get_mut("definitions")?
    };
    container.get_mut(name)?.as_object_mut()
}
