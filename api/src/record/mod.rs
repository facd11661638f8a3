//! The validated record contract.
//!
//! Every model type implements [`Record`]. The trait ties a plain serde
//! struct to its static [`Schema`] and provides the generic operations of
//! the contract on top of it:
//!
//! - [`Record::to_mapping`] - wire-keyed JSON object covering every field
//! - [`Record::from_mapping`] - schema-checked decoding from a wire mapping
//! - [`Record::get`] / [`Record::set`] - name-based field access, with `set`
//!   running the same checks as the typed setters
//! - [`Record::to_display_string`] - deterministic pretty rendering
//!
//! Equality is the derived structural [`PartialEq`].
//!
//! ## Examples
//!
//! ```rust,ignore
//! use nifi_api::Record;
//! use nifi_api::models::registry::Bucket;
//!
//! let mut bucket = Bucket::builder().name("flows").build()?;
//! bucket.set("description", serde_json::json!("shared flows"))?;
//! assert_eq!(bucket.to_mapping()["name"], "flows");
//! ```

mod schema;
pub mod validate;

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ValidationError;

pub use schema::{Field, Kind, Rules, Schema};

/// A schema-described data transfer object.
pub trait Record: Serialize + DeserializeOwned + Clone + PartialEq + Debug {
    /// Returns this record type's static schema.
    fn schema() -> &'static Schema;

    /// Converts the record to a JSON object keyed by wire name.
    ///
    /// Unset optional fields are present with a null value. Nested records
    /// are converted recursively.
    fn to_mapping(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // Derived serializers for records always produce objects with string keys.
            other => unreachable!("{} serialized to {other:?}", Self::schema().name),
        }
    }

    /// Builds a record from a wire mapping.
    ///
    /// The mapping is validated against the schema first, so a null or
    /// missing required field, an out-of-range value or a wrong JSON type is
    /// reported as the matching [`ValidationError`] instead of a generic
    /// decode failure.
    fn from_mapping(map: Map<String, Value>) -> Result<Self, ValidationError> {
        Self::schema().check_object(&map)?;
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// Builds a record from any JSON value, which must be an object.
    fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Self::from_mapping(map),
            _ => Err(ValidationError::ExpectedObject {
                record: Self::schema().name,
            }),
        }
    }

    /// Re-checks every field of an existing record.
    fn validate(&self) -> Result<(), ValidationError> {
        Self::schema().check_object(&self.to_mapping())
    }

    /// Returns the wire value of the field with the given local name.
    fn get(&self, field: &str) -> Result<Value, ValidationError> {
        let field = Self::schema().field(field)?;
        Ok(self.to_mapping().remove(field.wire).unwrap_or(Value::Null))
    }

    /// Assigns a wire value to the field with the given local name.
    ///
    /// The record is left unchanged when validation fails.
    fn set(&mut self, field: &str, value: Value) -> Result<(), ValidationError> {
        let field = Self::schema().field(field)?;
        field.check(&value)?;
        let mut map = self.to_mapping();
        map.insert(field.wire.to_string(), value);
        *self = Self::from_mapping(map)?;
        Ok(())
    }

    /// Renders the wire mapping as indented JSON with sorted keys.
    fn to_display_string(&self) -> String {
        let value = Value::Object(self.to_mapping());
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }
}
