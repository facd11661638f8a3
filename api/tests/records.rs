//! Contract tests for the validated record types.

use std::collections::HashMap;

use nifi_api::models::nifi::{
    FlowSnippetDto, PositionDto, ProcessGroupDto, ProcessorDto, ProcessorRunStatusEntity,
    ProcessorState, RevisionDto, RunState, ValidationStatus,
};
use nifi_api::models::registry::{
    AccessPolicy, Bucket, BucketItemType, Link, Permissions, PolicyAction, RevisionInfo, Tenant,
    VersionedFlow, VersionedFlowSnapshotMetadata,
};
use nifi_api::{Record, ValidationError};
use serde_json::{Value, json};

fn full_bucket() -> Bucket {
    let mut link = Link::new("buckets/b-1");
    link.set_params(Some(HashMap::from([("rel".to_string(), "self".to_string())])));

    let mut revision = RevisionInfo::new(2).unwrap();
    revision.set_client_id(Some("client-1".to_string()));

    Bucket::builder()
        .link(link)
        .identifier("b-1")
        .name("Shared flows")
        .created_timestamp(1_700_000_000_000)
        .description("Flows shared between teams")
        .allow_bundle_redeploy(false)
        .allow_public_read(true)
        .permissions(Permissions::new(true, true, false))
        .revision(revision)
        .build()
        .unwrap()
}

#[test]
fn required_field_rejects_null() {
    let mut bucket = full_bucket();
    let err = bucket.set("name", Value::Null).unwrap_err();
    assert!(matches!(err, ValidationError::Required { field: "name" }));
    assert_eq!(err.to_string(), "value for `name` must not be null");
    assert_eq!(bucket.name(), "Shared flows");

    assert!(matches!(
        Bucket::builder().identifier("b-2").build(),
        Err(ValidationError::Required { field: "name" })
    ));
    assert!(matches!(
        VersionedFlow::builder().name("flow").build(),
        Err(ValidationError::Required { field: "bucket_identifier" })
    ));
}

#[test]
fn required_field_accepts_valid_value() {
    let mut bucket = full_bucket();
    bucket.set("name", json!("Renamed")).unwrap();
    assert_eq!(bucket.get("name").unwrap(), json!("Renamed"));
    assert_eq!(bucket.name(), "Renamed");
}

#[test]
fn enum_field_accepts_members_only() {
    let mut request = ProcessorRunStatusEntity::new(RevisionDto::new(0).unwrap(), RunState::Stopped);
    for state in ["RUNNING", "STOPPED", "DISABLED", "RUN_ONCE"] {
        request.set("state", json!(state)).unwrap();
        assert_eq!(request.get("state").unwrap(), json!(state));
    }

    let err = request.set("state", json!("PAUSED")).unwrap_err();
    let message = err.to_string();
    for allowed in ["RUNNING", "STOPPED", "DISABLED", "RUN_ONCE"] {
        assert!(message.contains(allowed), "{message} should list {allowed}");
    }
    assert_eq!(request.state(), RunState::RunOnce);
}

#[test]
fn enum_values_are_case_sensitive() {
    let mut policy = AccessPolicy::new("/buckets", PolicyAction::Read);
    assert!(policy.set("action", json!("WRITE")).is_err());
    policy.set("action", json!("write")).unwrap();
    assert_eq!(policy.action(), PolicyAction::Write);
}

#[test]
fn length_bounds_are_inclusive() {
    let mut bucket = full_bucket();

    bucket.set_name("a").unwrap();
    bucket.set_name("a".repeat(1000)).unwrap();
    assert!(matches!(
        bucket.set_name(""),
        Err(ValidationError::TooShort { field: "name", min: 1, actual: 0 })
    ));
    assert!(matches!(
        bucket.set_name("a".repeat(1001)),
        Err(ValidationError::TooLong { field: "name", max: 1000, actual: 1001 })
    ));

    bucket.set_description(Some("d".repeat(4096))).unwrap();
    let err = bucket.set_description(Some("d".repeat(4097))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "length of `description` must be less than or equal to 4096"
    );
}

#[test]
fn length_counts_characters_not_bytes() {
    let mut bucket = full_bucket();
    bucket.set_name("é".repeat(1000)).unwrap();
    assert_eq!(bucket.name().chars().count(), 1000);
}

#[test]
fn numeric_lower_bound() {
    assert!(VersionedFlowSnapshotMetadata::new("b", "f", -1).is_ok());
    assert!(matches!(
        VersionedFlowSnapshotMetadata::new("b", "f", -2),
        Err(ValidationError::BelowMinimum { field: "version", minimum: -1 })
    ));
    assert!(RevisionDto::new(0).is_ok());
    assert!(RevisionDto::new(-1).is_err());
}

#[test]
fn set_rejects_type_coercion() {
    let mut bucket = full_bucket();
    assert!(matches!(
        bucket.set("name", json!(42)),
        Err(ValidationError::InvalidType { field: "name", .. })
    ));
    assert!(matches!(
        bucket.set("created_timestamp", json!("1700000000000")),
        Err(ValidationError::InvalidType { field: "created_timestamp", .. })
    ));
}

#[test]
fn unknown_field_name() {
    let bucket = full_bucket();
    assert!(matches!(
        bucket.get("createdTimestamp"),
        Err(ValidationError::UnknownField { record: "Bucket", .. })
    ));
}

#[test]
fn mapping_uses_wire_names_and_covers_every_field() {
    let bucket = Bucket::builder().name("minimal").build().unwrap();
    let map = bucket.to_mapping();

    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected: Vec<&str> = Bucket::schema().fields.iter().map(|f| f.wire).collect();
    expected.sort_unstable();
    assert_eq!(keys, expected);

    assert_eq!(map["name"], "minimal");
    assert!(map["allowPublicRead"].is_null());
    assert!(map["createdTimestamp"].is_null());
}

#[test]
fn mapping_converts_nested_records() {
    let mut policy = AccessPolicy::new("/buckets/b-1", PolicyAction::Delete);
    policy.set_users(Some(vec![Tenant::new("alice").unwrap()]));

    let map = policy.to_mapping();
    assert_eq!(map["users"][0]["identity"], "alice");
    assert!(map["users"][0]["identifier"].is_null());
    assert!(map["userGroups"].is_null());
}

#[test]
fn round_trip_registry_records() {
    let bucket = full_bucket();
    assert_eq!(Bucket::from_mapping(bucket.to_mapping()).unwrap(), bucket);

    let flow = VersionedFlow::builder()
        .identifier("f-1")
        .name("ingest")
        .description("Ingest pipeline")
        .bucket_identifier("b-1")
        .bucket_name("Shared flows")
        .r#type(BucketItemType::Flow)
        .version_count(3)
        .permissions(Permissions::new(true, false, false))
        .build()
        .unwrap();
    assert_eq!(VersionedFlow::from_mapping(flow.to_mapping()).unwrap(), flow);
    assert_eq!(flow.to_mapping()["type"], "Flow");
}

#[test]
fn round_trip_nested_process_groups() {
    let mut processor = ProcessorDto::default();
    processor.set_id(Some("p-1".to_string()));
    processor.set_state(Some(ProcessorState::Running));
    processor.set_physical_state(Some(ProcessorState::Starting));
    processor.set_validation_status(Some(ValidationStatus::Valid));
    processor.set_style(Some(HashMap::from([(
        "background-color".to_string(),
        "#ffffff".to_string(),
    )])));
    processor.set_position(Some(PositionDto::new(10.5, -3.0)));

    let mut grandchild = ProcessGroupDto::default();
    grandchild.set_id(Some("grandchild".to_string()));
    grandchild.set_running_count(Some(1)).unwrap();

    let mut child_contents = FlowSnippetDto::default();
    child_contents.set_process_groups(Some(vec![grandchild]));
    child_contents.set_processors(Some(vec![processor]));

    let mut child = ProcessGroupDto::default();
    child.set_id(Some("child".to_string()));
    child.set_contents(Some(child_contents));

    let mut root_contents = FlowSnippetDto::default();
    root_contents.set_process_groups(Some(vec![child]));

    let mut root = ProcessGroupDto::default();
    root.set_id(Some("root".to_string()));
    root.set_name(Some("NiFi Flow".to_string()));
    root.set_contents(Some(root_contents));

    let map = root.to_mapping();
    assert_eq!(
        map["contents"]["processGroups"][0]["contents"]["processGroups"][0]["runningCount"],
        1
    );
    assert_eq!(
        map["contents"]["processGroups"][0]["contents"]["processors"][0]["physicalState"],
        "STARTING"
    );
    assert_eq!(ProcessGroupDto::from_mapping(map).unwrap(), root);
}

#[test]
fn equality_is_structural() {
    let a = full_bucket();
    let mut b = full_bucket();
    assert_eq!(a, b);

    b.set_allow_public_read(Some(false));
    assert_ne!(a, b);
}

#[test]
fn display_string_is_deterministic() {
    let bucket = full_bucket();
    let first = bucket.to_display_string();
    assert_eq!(first, full_bucket().to_display_string());

    let allow = first.find("\"allowBundleRedeploy\"").unwrap();
    let name = first.find("\"name\"").unwrap();
    assert!(allow < name, "keys should be sorted:\n{first}");
    assert!(first.contains('\n'));
}

#[test]
fn from_mapping_validates_server_payloads() {
    let payload = json!({
        "identifier": "b-1",
        "name": "ok",
        "description": "x".repeat(5000)
    });
    assert!(matches!(
        Bucket::from_value(payload),
        Err(ValidationError::TooLong { field: "description", .. })
    ));

    assert!(matches!(
        Bucket::from_value(json!(["not", "an", "object"])),
        Err(ValidationError::ExpectedObject { record: "Bucket" })
    ));
}

#[test]
fn validate_accepts_constructed_records() {
    assert!(full_bucket().validate().is_ok());
    assert!(ProcessGroupDto::default().validate().is_ok());
}
