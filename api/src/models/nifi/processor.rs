//! Processors and their run-status requests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use super::{PermissionsDto, PositionDto, RevisionDto};
use crate::error::ValidationError;
use crate::record::{Field, Kind, Record, Schema};

/// Scheduled or physical state of a processor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessorState {
    Running,
    Stopped,
    Disabled,
    Starting,
    Stopping,
    RunOnce,
}

/// Result of the last component validation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    Valid,
    Invalid,
    Validating,
}

/// Target state accepted by the processor run-status endpoint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    Running,
    Stopped,
    Disabled,
    RunOnce,
}

const STRING_KIND: Kind = Kind::String;

const ID: Field = Field::string("id", "id");
const PARENT_GROUP_ID: Field = Field::string("parent_group_id", "parentGroupId");
const POSITION: Field = Field::record("position", "position", PositionDto::schema);
const NAME: Field = Field::string("name", "name");
const TYPE: Field = Field::string("type", "type");
const STATE: Field = Field::enumeration("state", "state", ProcessorState::VARIANTS);
const PHYSICAL_STATE: Field =
    Field::enumeration("physical_state", "physicalState", ProcessorState::VARIANTS);
const STYLE: Field = Field::map("style", "style", &STRING_KIND);
const VALIDATION_STATUS: Field =
    Field::enumeration("validation_status", "validationStatus", ValidationStatus::VARIANTS);
const VALIDATION_ERRORS: Field = Field::list("validation_errors", "validationErrors", &STRING_KIND);

static PROCESSOR_SCHEMA: Schema = Schema {
    name: "ProcessorDTO",
    fields: &[
        ID,
        PARENT_GROUP_ID,
        POSITION,
        NAME,
        TYPE,
        STATE,
        PHYSICAL_STATE,
        STYLE,
        VALIDATION_STATUS,
        VALIDATION_ERRORS,
    ],
};

/// Configuration and state of a processor.
///
/// All fields are optional; start from [`Default`] and use the setters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorDto {
    id: Option<String>,
    parent_group_id: Option<String>,
    position: Option<PositionDto>,
    name: Option<String>,
    r#type: Option<String>,
    state: Option<ProcessorState>,
    physical_state: Option<ProcessorState>,
    style: Option<HashMap<String, String>>,
    validation_status: Option<ValidationStatus>,
    validation_errors: Option<Vec<String>>,
}

impl ProcessorDto {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn parent_group_id(&self) -> Option<&str> {
        self.parent_group_id.as_deref()
    }

    pub fn set_parent_group_id(&mut self, id: Option<String>) {
        self.parent_group_id = id;
    }

    pub fn position(&self) -> Option<&PositionDto> {
        self.position.as_ref()
    }

    pub fn set_position(&mut self, position: Option<PositionDto>) {
        self.position = position;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Fully qualified processor class name.
    pub fn r#type(&self) -> Option<&str> {
        self.r#type.as_deref()
    }

    pub fn set_type(&mut self, processor_type: Option<String>) {
        self.r#type = processor_type;
    }

    pub fn state(&self) -> Option<ProcessorState> {
        self.state
    }

    pub fn set_state(&mut self, state: Option<ProcessorState>) {
        self.state = state;
    }

    pub fn physical_state(&self) -> Option<ProcessorState> {
        self.physical_state
    }

    pub fn set_physical_state(&mut self, state: Option<ProcessorState>) {
        self.physical_state = state;
    }

    pub fn style(&self) -> Option<&HashMap<String, String>> {
        self.style.as_ref()
    }

    pub fn set_style(&mut self, style: Option<HashMap<String, String>>) {
        self.style = style;
    }

    pub fn validation_status(&self) -> Option<ValidationStatus> {
        self.validation_status
    }

    pub fn set_validation_status(&mut self, status: Option<ValidationStatus>) {
        self.validation_status = status;
    }

    pub fn validation_errors(&self) -> Option<&[String]> {
        self.validation_errors.as_deref()
    }

    pub fn set_validation_errors(&mut self, errors: Option<Vec<String>>) {
        self.validation_errors = errors;
    }
}

impl Record for ProcessorDto {
    fn schema() -> &'static Schema {
        &PROCESSOR_SCHEMA
    }
}

const ENTITY_REVISION: Field = Field::record("revision", "revision", RevisionDto::schema);
const ENTITY_ID: Field = Field::string("id", "id");
const ENTITY_URI: Field = Field::string("uri", "uri");
const ENTITY_POSITION: Field = Field::record("position", "position", PositionDto::schema);
const ENTITY_PERMISSIONS: Field =
    Field::record("permissions", "permissions", PermissionsDto::schema);
const ENTITY_COMPONENT: Field = Field::record("component", "component", ProcessorDto::schema);

static PROCESSOR_ENTITY_SCHEMA: Schema = Schema {
    name: "ProcessorEntity",
    fields: &[
        ENTITY_REVISION,
        ENTITY_ID,
        ENTITY_URI,
        ENTITY_POSITION,
        ENTITY_PERMISSIONS,
        ENTITY_COMPONENT,
    ],
};

/// A processor together with its revision and access metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessorEntity {
    revision: Option<RevisionDto>,
    id: Option<String>,
    uri: Option<String>,
    position: Option<PositionDto>,
    permissions: Option<PermissionsDto>,
    component: Option<ProcessorDto>,
}

impl ProcessorEntity {
    pub fn revision(&self) -> Option<&RevisionDto> {
        self.revision.as_ref()
    }

    pub fn set_revision(&mut self, revision: Option<RevisionDto>) {
        self.revision = revision;
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn set_uri(&mut self, uri: Option<String>) {
        self.uri = uri;
    }

    pub fn position(&self) -> Option<&PositionDto> {
        self.position.as_ref()
    }

    pub fn set_position(&mut self, position: Option<PositionDto>) {
        self.position = position;
    }

    pub fn permissions(&self) -> Option<&PermissionsDto> {
        self.permissions.as_ref()
    }

    pub fn set_permissions(&mut self, permissions: Option<PermissionsDto>) {
        self.permissions = permissions;
    }

    pub fn component(&self) -> Option<&ProcessorDto> {
        self.component.as_ref()
    }

    pub fn set_component(&mut self, component: Option<ProcessorDto>) {
        self.component = component;
    }
}

impl Record for ProcessorEntity {
    fn schema() -> &'static Schema {
        &PROCESSOR_ENTITY_SCHEMA
    }
}

const RUN_REVISION: Field = Field::record("revision", "revision", RevisionDto::schema).required();
const RUN_STATE: Field = Field::enumeration("state", "state", RunState::VARIANTS).required();
const RUN_DISCONNECTED_ACK: Field =
    Field::boolean("disconnected_node_acknowledged", "disconnectedNodeAcknowledged");

static RUN_STATUS_SCHEMA: Schema = Schema {
    name: "ProcessorRunStatusEntity",
    fields: &[RUN_REVISION, RUN_STATE, RUN_DISCONNECTED_ACK],
};

/// Request body for changing a processor's run state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorRunStatusEntity {
    revision: RevisionDto,
    state: RunState,
    disconnected_node_acknowledged: Option<bool>,
}

impl ProcessorRunStatusEntity {
    pub fn new(revision: RevisionDto, state: RunState) -> Self {
        Self {
            revision,
            state,
            disconnected_node_acknowledged: None,
        }
    }

    pub fn revision(&self) -> &RevisionDto {
        &self.revision
    }

    pub fn set_revision(&mut self, revision: RevisionDto) {
        self.revision = revision;
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn set_state(&mut self, state: RunState) {
        self.state = state;
    }

    pub fn disconnected_node_acknowledged(&self) -> Option<bool> {
        self.disconnected_node_acknowledged
    }

    pub fn set_disconnected_node_acknowledged(&mut self, ack: Option<bool>) {
        self.disconnected_node_acknowledged = ack;
    }

    /// Parses a wire state string, reporting the allowed values on failure.
    pub fn parse_state(value: &str) -> Result<RunState, ValidationError> {
        RUN_STATE.check_str(value)?;
        value
            .parse()
            .map_err(|_| ValidationError::NotAllowed {
                field: RUN_STATE.name,
                value: value.to_string(),
                allowed: RunState::VARIANTS,
            })
    }
}

impl Record for ProcessorRunStatusEntity {
    fn schema() -> &'static Schema {
        &RUN_STATUS_SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_wire_names() {
        assert_eq!(ProcessorState::RunOnce.to_string(), "RUN_ONCE");
        assert_eq!(
            serde_json::to_value(ProcessorState::RunOnce).unwrap(),
            json!("RUN_ONCE")
        );
        assert!(ProcessorState::VARIANTS.contains(&"STOPPING"));
    }

    #[test]
    fn test_parse_state() {
        assert_eq!(
            ProcessorRunStatusEntity::parse_state("RUN_ONCE").unwrap(),
            RunState::RunOnce
        );
        let err = ProcessorRunStatusEntity::parse_state("STARTING").unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { field: "state", .. }));
    }

    #[test]
    fn test_run_status_requires_revision() {
        let err = ProcessorRunStatusEntity::from_value(json!({ "state": "RUNNING" })).unwrap_err();
        assert!(matches!(err, ValidationError::Required { field: "revision" }));
    }

    #[test]
    fn test_processor_entity_nested_component() {
        let value = json!({
            "id": "p-1",
            "revision": { "version": 3 },
            "component": {
                "id": "p-1",
                "state": "STOPPED",
                "validationErrors": ["Relationship success is not connected"]
            }
        });
        let entity = ProcessorEntity::from_value(value).unwrap();
        let component = entity.component().unwrap();
        assert_eq!(component.state(), Some(ProcessorState::Stopped));
        assert_eq!(component.validation_errors().unwrap().len(), 1);
        assert_eq!(entity.revision().unwrap().version(), Some(3));
    }
}
