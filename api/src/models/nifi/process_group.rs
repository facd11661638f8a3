//! Process groups, their contents and bulk scheduling.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use super::{PermissionsDto, PositionDto, ProcessorDto, RevisionDto};
use crate::error::ValidationError;
use crate::record::{Field, Kind, Record, Schema};

/// Target state of a bulk scheduling request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduledState {
    Running,
    Stopped,
    Enabled,
    Disabled,
}

/// Synchronization state of a versioned process group.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum VersionControlState {
    LocallyModified,
    Stale,
    LocallyModifiedAndStale,
    UpToDate,
    SyncFailure,
}

const REVISION_KIND: Kind = Kind::Record(RevisionDto::schema);

const SCHEDULE_ID: Field = Field::string("id", "id");
const SCHEDULE_STATE: Field =
    Field::enumeration("state", "state", ScheduledState::VARIANTS).required();
const SCHEDULE_COMPONENTS: Field = Field::map("components", "components", &REVISION_KIND);
const SCHEDULE_DISCONNECTED_ACK: Field =
    Field::boolean("disconnected_node_acknowledged", "disconnectedNodeAcknowledged");

static SCHEDULE_SCHEMA: Schema = Schema {
    name: "ScheduleComponentsEntity",
    fields: &[
        SCHEDULE_ID,
        SCHEDULE_STATE,
        SCHEDULE_COMPONENTS,
        SCHEDULE_DISCONNECTED_ACK,
    ],
};

/// Request body that starts, stops, enables or disables the components of a
/// process group.
///
/// When `components` is unset the state applies to every eligible component
/// in the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleComponentsEntity {
    id: Option<String>,
    state: ScheduledState,
    components: Option<HashMap<String, RevisionDto>>,
    disconnected_node_acknowledged: Option<bool>,
}

impl ScheduleComponentsEntity {
    pub fn new(group_id: impl Into<String>, state: ScheduledState) -> Self {
        Self {
            id: Some(group_id.into()),
            state,
            components: None,
            disconnected_node_acknowledged: None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn state(&self) -> ScheduledState {
        self.state
    }

    pub fn set_state(&mut self, state: ScheduledState) {
        self.state = state;
    }

    /// Revisions of the components to schedule, keyed by component id.
    pub fn components(&self) -> Option<&HashMap<String, RevisionDto>> {
        self.components.as_ref()
    }

    pub fn set_components(&mut self, components: Option<HashMap<String, RevisionDto>>) {
        self.components = components;
    }

    pub fn disconnected_node_acknowledged(&self) -> Option<bool> {
        self.disconnected_node_acknowledged
    }

    pub fn set_disconnected_node_acknowledged(&mut self, ack: Option<bool>) {
        self.disconnected_node_acknowledged = ack;
    }
}

impl Record for ScheduleComponentsEntity {
    fn schema() -> &'static Schema {
        &SCHEDULE_SCHEMA
    }
}

const VCI_GROUP_ID: Field = Field::string("group_id", "groupId");
const VCI_REGISTRY_ID: Field = Field::string("registry_id", "registryId");
const VCI_BUCKET_ID: Field = Field::string("bucket_id", "bucketId");
const VCI_FLOW_ID: Field = Field::string("flow_id", "flowId");
const VCI_VERSION: Field = Field::string("version", "version");
const VCI_STATE: Field = Field::enumeration("state", "state", VersionControlState::VARIANTS);

static VCI_SCHEMA: Schema = Schema {
    name: "VersionControlInformationDTO",
    fields: &[
        VCI_GROUP_ID,
        VCI_REGISTRY_ID,
        VCI_BUCKET_ID,
        VCI_FLOW_ID,
        VCI_VERSION,
        VCI_STATE,
    ],
};

/// Link between a process group and a flow stored in a registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionControlInformationDto {
    group_id: Option<String>,
    registry_id: Option<String>,
    bucket_id: Option<String>,
    flow_id: Option<String>,
    version: Option<String>,
    state: Option<VersionControlState>,
}

impl VersionControlInformationDto {
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn set_group_id(&mut self, id: Option<String>) {
        self.group_id = id;
    }

    pub fn registry_id(&self) -> Option<&str> {
        self.registry_id.as_deref()
    }

    pub fn set_registry_id(&mut self, id: Option<String>) {
        self.registry_id = id;
    }

    pub fn bucket_id(&self) -> Option<&str> {
        self.bucket_id.as_deref()
    }

    pub fn set_bucket_id(&mut self, id: Option<String>) {
        self.bucket_id = id;
    }

    pub fn flow_id(&self) -> Option<&str> {
        self.flow_id.as_deref()
    }

    pub fn set_flow_id(&mut self, id: Option<String>) {
        self.flow_id = id;
    }

    /// Registry version the group is tracking.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_version(&mut self, version: Option<String>) {
        self.version = version;
    }

    pub fn state(&self) -> Option<VersionControlState> {
        self.state
    }

    pub fn set_state(&mut self, state: Option<VersionControlState>) {
        self.state = state;
    }
}

impl Record for VersionControlInformationDto {
    fn schema() -> &'static Schema {
        &VCI_SCHEMA
    }
}

const PROCESS_GROUP_KIND: Kind = Kind::Record(ProcessGroupDto::schema);
const PROCESSOR_KIND: Kind = Kind::Record(ProcessorDto::schema);

const SNIPPET_PROCESS_GROUPS: Field =
    Field::list("process_groups", "processGroups", &PROCESS_GROUP_KIND);
const SNIPPET_PROCESSORS: Field = Field::list("processors", "processors", &PROCESSOR_KIND);

static SNIPPET_SCHEMA: Schema = Schema {
    name: "FlowSnippetDTO",
    fields: &[SNIPPET_PROCESS_GROUPS, SNIPPET_PROCESSORS],
};

/// The components inside a process group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSnippetDto {
    process_groups: Option<Vec<ProcessGroupDto>>,
    processors: Option<Vec<ProcessorDto>>,
}

impl FlowSnippetDto {
    pub fn process_groups(&self) -> Option<&[ProcessGroupDto]> {
        self.process_groups.as_deref()
    }

    pub fn set_process_groups(&mut self, groups: Option<Vec<ProcessGroupDto>>) {
        self.process_groups = groups;
    }

    pub fn processors(&self) -> Option<&[ProcessorDto]> {
        self.processors.as_deref()
    }

    pub fn set_processors(&mut self, processors: Option<Vec<ProcessorDto>>) {
        self.processors = processors;
    }
}

impl Record for FlowSnippetDto {
    fn schema() -> &'static Schema {
        &SNIPPET_SCHEMA
    }
}

const GROUP_ID: Field = Field::string("id", "id");
const GROUP_PARENT_GROUP_ID: Field = Field::string("parent_group_id", "parentGroupId");
const GROUP_NAME: Field = Field::string("name", "name");
const GROUP_COMMENTS: Field = Field::string("comments", "comments");
const GROUP_POSITION: Field = Field::record("position", "position", PositionDto::schema);
const GROUP_RUNNING_COUNT: Field = Field::integer("running_count", "runningCount").minimum(0);
const GROUP_STOPPED_COUNT: Field = Field::integer("stopped_count", "stoppedCount").minimum(0);
const GROUP_INVALID_COUNT: Field = Field::integer("invalid_count", "invalidCount").minimum(0);
const GROUP_DISABLED_COUNT: Field = Field::integer("disabled_count", "disabledCount").minimum(0);
const GROUP_VERSION_CONTROL: Field = Field::record(
    "version_control_information",
    "versionControlInformation",
    VersionControlInformationDto::schema,
);
const GROUP_CONTENTS: Field = Field::record("contents", "contents", FlowSnippetDto::schema);

static PROCESS_GROUP_SCHEMA: Schema = Schema {
    name: "ProcessGroupDTO",
    fields: &[
        GROUP_ID,
        GROUP_PARENT_GROUP_ID,
        GROUP_NAME,
        GROUP_COMMENTS,
        GROUP_POSITION,
        GROUP_RUNNING_COUNT,
        GROUP_STOPPED_COUNT,
        GROUP_INVALID_COUNT,
        GROUP_DISABLED_COUNT,
        GROUP_VERSION_CONTROL,
        GROUP_CONTENTS,
    ],
};

fn check_count(field: &Field, count: Option<i64>) -> Result<(), ValidationError> {
    match count {
        Some(c) => field.check_int(c),
        None => Ok(()),
    }
}

/// A process group. Its `contents` may hold further process groups to any
/// depth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessGroupDto {
    id: Option<String>,
    parent_group_id: Option<String>,
    name: Option<String>,
    comments: Option<String>,
    position: Option<PositionDto>,
    running_count: Option<i64>,
    stopped_count: Option<i64>,
    invalid_count: Option<i64>,
    disabled_count: Option<i64>,
    version_control_information: Option<VersionControlInformationDto>,
    contents: Option<FlowSnippetDto>,
}

impl ProcessGroupDto {
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

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    pub fn set_comments(&mut self, comments: Option<String>) {
        self.comments = comments;
    }

    pub fn position(&self) -> Option<&PositionDto> {
        self.position.as_ref()
    }

    pub fn set_position(&mut self, position: Option<PositionDto>) {
        self.position = position;
    }

    pub fn running_count(&self) -> Option<i64> {
        self.running_count
    }

    pub fn set_running_count(&mut self, count: Option<i64>) -> Result<(), ValidationError> {
        check_count(&GROUP_RUNNING_COUNT, count)?;
        self.running_count = count;
        Ok(())
    }

    pub fn stopped_count(&self) -> Option<i64> {
        self.stopped_count
    }

    pub fn set_stopped_count(&mut self, count: Option<i64>) -> Result<(), ValidationError> {
        check_count(&GROUP_STOPPED_COUNT, count)?;
        self.stopped_count = count;
        Ok(())
    }

    pub fn invalid_count(&self) -> Option<i64> {
        self.invalid_count
    }

    pub fn set_invalid_count(&mut self, count: Option<i64>) -> Result<(), ValidationError> {
        check_count(&GROUP_INVALID_COUNT, count)?;
        self.invalid_count = count;
        Ok(())
    }

    pub fn disabled_count(&self) -> Option<i64> {
        self.disabled_count
    }

    pub fn set_disabled_count(&mut self, count: Option<i64>) -> Result<(), ValidationError> {
        check_count(&GROUP_DISABLED_COUNT, count)?;
        self.disabled_count = count;
        Ok(())
    }

    pub fn version_control_information(&self) -> Option<&VersionControlInformationDto> {
        self.version_control_information.as_ref()
    }

    pub fn set_version_control_information(&mut self, info: Option<VersionControlInformationDto>) {
        self.version_control_information = info;
    }

    pub fn contents(&self) -> Option<&FlowSnippetDto> {
        self.contents.as_ref()
    }

    pub fn set_contents(&mut self, contents: Option<FlowSnippetDto>) {
        self.contents = contents;
    }

    /// Child process groups directly inside this group.
    pub fn child_groups(&self) -> &[ProcessGroupDto] {
        self.contents
            .as_ref()
            .and_then(FlowSnippetDto::process_groups)
            .unwrap_or_default()
    }
}

impl Record for ProcessGroupDto {
    fn schema() -> &'static Schema {
        &PROCESS_GROUP_SCHEMA
    }
}

const ENTITY_REVISION: Field = Field::record("revision", "revision", RevisionDto::schema);
const ENTITY_ID: Field = Field::string("id", "id");
const ENTITY_URI: Field = Field::string("uri", "uri");
const ENTITY_PERMISSIONS: Field =
    Field::record("permissions", "permissions", PermissionsDto::schema);
const ENTITY_COMPONENT: Field = Field::record("component", "component", ProcessGroupDto::schema);
const ENTITY_RUNNING_COUNT: Field = Field::integer("running_count", "runningCount").minimum(0);
const ENTITY_STOPPED_COUNT: Field = Field::integer("stopped_count", "stoppedCount").minimum(0);

static PROCESS_GROUP_ENTITY_SCHEMA: Schema = Schema {
    name: "ProcessGroupEntity",
    fields: &[
        ENTITY_REVISION,
        ENTITY_ID,
        ENTITY_URI,
        ENTITY_PERMISSIONS,
        ENTITY_COMPONENT,
        ENTITY_RUNNING_COUNT,
        ENTITY_STOPPED_COUNT,
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessGroupEntity {
    revision: Option<RevisionDto>,
    id: Option<String>,
    uri: Option<String>,
    permissions: Option<PermissionsDto>,
    component: Option<ProcessGroupDto>,
    running_count: Option<i64>,
    stopped_count: Option<i64>,
}

impl ProcessGroupEntity {
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

    pub fn permissions(&self) -> Option<&PermissionsDto> {
        self.permissions.as_ref()
    }

    pub fn set_permissions(&mut self, permissions: Option<PermissionsDto>) {
        self.permissions = permissions;
    }

    pub fn component(&self) -> Option<&ProcessGroupDto> {
        self.component.as_ref()
    }

    pub fn set_component(&mut self, component: Option<ProcessGroupDto>) {
        self.component = component;
    }

    pub fn running_count(&self) -> Option<i64> {
        self.running_count
    }

    pub fn set_running_count(&mut self, count: Option<i64>) -> Result<(), ValidationError> {
        check_count(&ENTITY_RUNNING_COUNT, count)?;
        self.running_count = count;
        Ok(())
    }

    pub fn stopped_count(&self) -> Option<i64> {
        self.stopped_count
    }

    pub fn set_stopped_count(&mut self, count: Option<i64>) -> Result<(), ValidationError> {
        check_count(&ENTITY_STOPPED_COUNT, count)?;
        self.stopped_count = count;
        Ok(())
    }
}

impl Record for ProcessGroupEntity {
    fn schema() -> &'static Schema {
        &PROCESS_GROUP_ENTITY_SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_negative_count_rejected() {
        let mut group = ProcessGroupDto::default();
        let err = group.set_running_count(Some(-1)).unwrap_err();
        assert!(matches!(err, ValidationError::BelowMinimum { field: "running_count", minimum: 0 }));
        assert_eq!(group.running_count(), None);
        group.set_running_count(Some(0)).unwrap();
        assert_eq!(group.running_count(), Some(0));
    }

    #[test]
    fn test_nested_groups_decode() {
        let value = json!({
            "id": "root",
            "contents": {
                "processGroups": [{
                    "id": "child",
                    "contents": { "processGroups": [{ "id": "grandchild" }] }
                }],
                "processors": [{ "id": "proc", "state": "RUNNING" }]
            }
        });
        let root = ProcessGroupDto::from_value(value).unwrap();
        let child = &root.child_groups()[0];
        assert_eq!(child.id(), Some("child"));
        assert_eq!(child.child_groups()[0].id(), Some("grandchild"));
        assert!(child.child_groups()[0].child_groups().is_empty());
    }

    #[test]
    fn test_nested_group_constraints_apply() {
        let value = json!({
            "contents": { "processGroups": [{ "id": "child", "stoppedCount": -2 }] }
        });
        assert!(matches!(
            ProcessGroupDto::from_value(value),
            Err(ValidationError::BelowMinimum { field: "stopped_count", .. })
        ));
    }

    #[test]
    fn test_schedule_components_wire_shape() {
        let mut request = ScheduleComponentsEntity::new("pg-1", ScheduledState::Enabled);
        let mut components = HashMap::new();
        components.insert("p-1".to_string(), RevisionDto::new(4).unwrap());
        request.set_components(Some(components));

        let map = request.to_mapping();
        assert_eq!(map["state"], "ENABLED");
        assert_eq!(map["components"]["p-1"]["version"], 4);
        assert!(map["disconnectedNodeAcknowledged"].is_null());
    }

    #[test]
    fn test_version_control_state_rejects_unknown() {
        let err = VersionControlInformationDto::from_value(json!({ "state": "DIVERGED" }))
            .unwrap_err();
        assert!(err.to_string().contains("UP_TO_DATE"));
    }
}
