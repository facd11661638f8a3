//! Static schema descriptors.
//!
//! Every record owns one [`Schema`]: a const table of [`Field`]s mapping the
//! local field name to its wire name, its [`Kind`] and its constraints.
//! Nested records are referenced through function pointers so that recursive
//! shapes (a process group containing process groups) can be described.

use serde_json::{Map, Value};

use super::validate;
use crate::error::ValidationError;

/// The shape of a field's value.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    /// A JSON string.
    String,
    /// A JSON integer.
    Integer,
    /// Any JSON number.
    Number,
    /// A JSON boolean.
    Boolean,
    /// A string restricted to a closed set of values.
    Enum(&'static [&'static str]),
    /// A nested record.
    Record(fn() -> &'static Schema),
    /// An array whose items all have the given kind.
    List(&'static Kind),
    /// A string-keyed object whose values all have the given kind.
    Map(&'static Kind),
}

impl Kind {
    fn expected(&self) -> &'static str {
        match self {
            Self::String | Self::Enum(_) => "a string",
            Self::Integer => "an integer",
            Self::Number => "a number",
            Self::Boolean => "a boolean",
            Self::Record(_) | Self::Map(_) => "an object",
            Self::List(_) => "an array",
        }
    }
}

/// Declared bounds on a field's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rules {
    /// Minimum string length in characters.
    pub min_length: Option<usize>,
    /// Maximum string length in characters.
    pub max_length: Option<usize>,
    /// Inclusive integer lower bound.
    pub minimum: Option<i64>,
}

impl Rules {
    const NONE: Self = Self {
        min_length: None,
        max_length: None,
        minimum: None,
    };
}

/// One declared field of a record.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Local (snake case) field name.
    pub name: &'static str,
    /// Wire (camel case) key used in JSON payloads.
    pub wire: &'static str,
    /// Shape of the value.
    pub kind: Kind,
    /// Whether null is rejected.
    pub required: bool,
    /// Declared bounds.
    pub rules: Rules,
}

impl Field {
    const fn new(name: &'static str, wire: &'static str, kind: Kind) -> Self {
        Self {
            name,
            wire,
            kind,
            required: false,
            rules: Rules::NONE,
        }
    }

    /// Declares a string field.
    pub const fn string(name: &'static str, wire: &'static str) -> Self {
        Self::new(name, wire, Kind::String)
    }

    /// Declares an integer field.
    pub const fn integer(name: &'static str, wire: &'static str) -> Self {
        Self::new(name, wire, Kind::Integer)
    }

    /// Declares a floating point field.
    pub const fn number(name: &'static str, wire: &'static str) -> Self {
        Self::new(name, wire, Kind::Number)
    }

    /// Declares a boolean field.
    pub const fn boolean(name: &'static str, wire: &'static str) -> Self {
        Self::new(name, wire, Kind::Boolean)
    }

    /// Declares a string field restricted to `allowed`.
    pub const fn enumeration(
        name: &'static str,
        wire: &'static str,
        allowed: &'static [&'static str],
    ) -> Self {
        Self::new(name, wire, Kind::Enum(allowed))
    }

    /// Declares a nested record field.
    pub const fn record(name: &'static str, wire: &'static str, schema: fn() -> &'static Schema) -> Self {
        Self::new(name, wire, Kind::Record(schema))
    }

    /// Declares a list field.
    pub const fn list(name: &'static str, wire: &'static str, item: &'static Kind) -> Self {
        Self::new(name, wire, Kind::List(item))
    }

    /// Declares a string-keyed map field.
    pub const fn map(name: &'static str, wire: &'static str, value: &'static Kind) -> Self {
        Self::new(name, wire, Kind::Map(value))
    }

    /// Marks the field as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Bounds the string length to `min..=max` characters.
    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.rules.min_length = Some(min);
        self.rules.max_length = Some(max);
        self
    }

    /// Sets a minimum string length.
    pub const fn min_length(mut self, min: usize) -> Self {
        self.rules.min_length = Some(min);
        self
    }

    /// Sets a maximum string length.
    pub const fn max_length(mut self, max: usize) -> Self {
        self.rules.max_length = Some(max);
        self
    }

    /// Sets an inclusive integer lower bound.
    pub const fn minimum(mut self, minimum: i64) -> Self {
        self.rules.minimum = Some(minimum);
        self
    }

    /// Unwraps a value for this field, failing when it is absent and the
    /// field is required.
    pub fn require<T>(&self, value: Option<T>) -> Result<T, ValidationError> {
        validate::required(self.name, value)
    }

    /// Validates a typed string value against enum membership and length.
    pub fn check_str(&self, value: &str) -> Result<(), ValidationError> {
        if let Kind::Enum(allowed) = self.kind {
            validate::one_of(self.name, value, allowed)?;
        }
        if self.rules.min_length.is_some() || self.rules.max_length.is_some() {
            validate::length(self.name, value, self.rules.min_length, self.rules.max_length)?;
        }
        Ok(())
    }

    /// Validates a typed integer value against the lower bound.
    pub fn check_int(&self, value: i64) -> Result<(), ValidationError> {
        match self.rules.minimum {
            Some(min) => validate::minimum(self.name, value, min),
            None => Ok(()),
        }
    }

    /// Validates a wire value: null handling, type, then declared bounds.
    ///
    /// Nested records are checked recursively against their own schemas.
    pub fn check(&self, value: &Value) -> Result<(), ValidationError> {
        if value.is_null() {
            return if self.required {
                Err(ValidationError::Required { field: self.name })
            } else {
                Ok(())
            };
        }
        check_kind(self.name, &self.kind, value)?;
        match value {
            Value::String(s) if self.rules.min_length.is_some() || self.rules.max_length.is_some() => {
                validate::length(self.name, s, self.rules.min_length, self.rules.max_length)
            }
            Value::Number(n) => match (self.rules.minimum, n.as_i64()) {
                (Some(min), Some(i)) => validate::minimum(self.name, i, min),
                // Only u64 values beyond i64::MAX land here, and they satisfy any bound.
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }
}

fn check_kind(field: &'static str, kind: &Kind, value: &Value) -> Result<(), ValidationError> {
    match (kind, value) {
        (Kind::String, Value::String(_)) => Ok(()),
        (Kind::Enum(allowed), Value::String(s)) => validate::one_of(field, s, allowed),
        (Kind::Integer, Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(()),
        (Kind::Number, Value::Number(_)) => Ok(()),
        (Kind::Boolean, Value::Bool(_)) => Ok(()),
        (Kind::Record(schema), Value::Object(map)) => schema().check_object(map),
        (Kind::List(item), Value::Array(items)) => {
            items.iter().try_for_each(|v| check_kind(field, item, v))
        }
        (Kind::Map(item), Value::Object(map)) => {
            map.values().try_for_each(|v| check_kind(field, item, v))
        }
        _ => Err(ValidationError::InvalidType {
            field,
            expected: kind.expected(),
        }),
    }
}

/// The field table of one record type.
#[derive(Debug)]
pub struct Schema {
    /// The record type name.
    pub name: &'static str,
    /// Every declared field, in declaration order.
    pub fields: &'static [Field],
}

impl Schema {
    /// Looks up a field by its local name.
    pub fn field(&self, name: &str) -> Result<&Field, ValidationError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| ValidationError::UnknownField {
                record: self.name,
                field: name.to_string(),
            })
    }

    /// Validates a wire mapping against every declared field.
    ///
    /// Missing keys are treated as null. Keys the schema does not declare
    /// are ignored.
    pub fn check_object(&self, map: &Map<String, Value>) -> Result<(), ValidationError> {
        self.fields
            .iter()
            .try_for_each(|field| field.check(map.get(field.wire).unwrap_or(&Value::Null)))
    }

    /// Validates an arbitrary JSON value, which must be an object.
    pub fn check(&self, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::Object(map) => self.check_object(map),
            _ => Err(ValidationError::ExpectedObject { record: self.name }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STATES: &[&str] = &["RUNNING", "STOPPED"];
    const NODE_KIND: Kind = Kind::Record(node_schema);

    static NODE: Schema = Schema {
        name: "Node",
        fields: &[
            Field::string("name", "name").required().length(1, 5),
            Field::enumeration("state", "state", STATES),
            Field::integer("count", "count").minimum(0),
            Field::list("children", "children", &NODE_KIND),
        ],
    };

    fn node_schema() -> &'static Schema {
        &NODE
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(NODE.field("state").unwrap().wire, "state");
        assert!(matches!(
            NODE.field("missing"),
            Err(ValidationError::UnknownField { record: "Node", .. })
        ));
    }

    #[test]
    fn test_check_accepts_valid_object() {
        let value = json!({ "name": "root", "state": "RUNNING", "count": 0, "children": [] });
        assert!(NODE.check(&value).is_ok());
    }

    #[test]
    fn test_missing_required_is_null() {
        let err = NODE.check(&json!({ "state": "RUNNING" })).unwrap_err();
        assert!(matches!(err, ValidationError::Required { field: "name" }));
    }

    #[test]
    fn test_no_type_coercion() {
        let err = NODE.check(&json!({ "name": "a", "count": "3" })).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidType { field: "count", expected: "an integer" }
        ));
        let err = NODE.check(&json!({ "name": "a", "count": 1.5 })).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidType { field: "count", .. }));
    }

    #[test]
    fn test_recursive_children_are_checked() {
        let value = json!({
            "name": "root",
            "children": [{ "name": "kid", "children": [{ "name": "toolong" }] }]
        });
        let err = NODE.check(&value).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "name", max: 5, .. }));
    }

    #[test]
    fn test_minimum_on_wire_value() {
        let err = NODE.check(&json!({ "name": "a", "count": -1 })).unwrap_err();
        assert!(matches!(err, ValidationError::BelowMinimum { field: "count", minimum: 0 }));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(
            NODE.check(&json!([1, 2])),
            Err(ValidationError::ExpectedObject { record: "Node" })
        ));
    }

    #[test]
    fn test_typed_checks() {
        let state = NODE.field("state").unwrap();
        assert!(state.check_str("STOPPED").is_ok());
        assert!(state.check_str("PAUSED").is_err());

        let count = NODE.field("count").unwrap();
        assert!(count.check_int(0).is_ok());
        assert!(count.check_int(-5).is_err());
    }
}
