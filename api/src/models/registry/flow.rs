//! Versioned flows and their snapshot metadata.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use super::{Link, Permissions, RevisionInfo};
use crate::error::ValidationError;
use crate::record::{Field, Record, Schema};

/// Kind of item stored in a bucket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
pub enum BucketItemType {
    /// A versioned flow.
    Flow,
    /// An extension bundle.
    Bundle,
}

const LINK: Field = Field::record("link", "link", Link::schema);
const IDENTIFIER: Field = Field::string("identifier", "identifier");
const NAME: Field = Field::string("name", "name").required().length(1, 1000);
const DESCRIPTION: Field = Field::string("description", "description").max_length(4096);
const BUCKET_IDENTIFIER: Field = Field::string("bucket_identifier", "bucketIdentifier").required();
const BUCKET_NAME: Field = Field::string("bucket_name", "bucketName");
const CREATED_TIMESTAMP: Field = Field::integer("created_timestamp", "createdTimestamp");
const MODIFIED_TIMESTAMP: Field = Field::integer("modified_timestamp", "modifiedTimestamp");
const TYPE: Field = Field::enumeration("type", "type", BucketItemType::VARIANTS).required();
const PERMISSIONS: Field = Field::record("permissions", "permissions", Permissions::schema);
const VERSION_COUNT: Field = Field::integer("version_count", "versionCount").minimum(0);
const REVISION: Field = Field::record("revision", "revision", RevisionInfo::schema);

static FLOW_SCHEMA: Schema = Schema {
    name: "VersionedFlow",
    fields: &[
        LINK,
        IDENTIFIER,
        NAME,
        DESCRIPTION,
        BUCKET_IDENTIFIER,
        BUCKET_NAME,
        CREATED_TIMESTAMP,
        MODIFIED_TIMESTAMP,
        TYPE,
        PERMISSIONS,
        VERSION_COUNT,
        REVISION,
    ],
};

/// A flow tracked by the registry, independent of any one version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionedFlow {
    link: Option<Link>,
    identifier: Option<String>,
    name: String,
    description: Option<String>,
    bucket_identifier: String,
    bucket_name: Option<String>,
    created_timestamp: Option<i64>,
    modified_timestamp: Option<i64>,
    r#type: BucketItemType,
    permissions: Option<Permissions>,
    version_count: Option<i64>,
    revision: Option<RevisionInfo>,
}

impl VersionedFlow {
    /// Creates a builder; `type` defaults to [`BucketItemType::Flow`].
    pub fn builder() -> VersionedFlowBuilder {
        VersionedFlowBuilder {
            r#type: Some(BucketItemType::Flow),
            ..Default::default()
        }
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    pub fn set_link(&mut self, link: Option<Link>) {
        self.link = link;
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn set_identifier(&mut self, identifier: Option<String>) {
        self.identifier = identifier;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        NAME.check_str(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) -> Result<(), ValidationError> {
        if let Some(d) = &description {
            DESCRIPTION.check_str(d)?;
        }
        self.description = description;
        Ok(())
    }

    pub fn bucket_identifier(&self) -> &str {
        &self.bucket_identifier
    }

    pub fn set_bucket_identifier(&mut self, bucket: impl Into<String>) {
        self.bucket_identifier = bucket.into();
    }

    pub fn bucket_name(&self) -> Option<&str> {
        self.bucket_name.as_deref()
    }

    pub fn set_bucket_name(&mut self, bucket_name: Option<String>) {
        self.bucket_name = bucket_name;
    }

    pub fn created_timestamp(&self) -> Option<i64> {
        self.created_timestamp
    }

    pub fn set_created_timestamp(&mut self, timestamp: Option<i64>) {
        self.created_timestamp = timestamp;
    }

    pub fn modified_timestamp(&self) -> Option<i64> {
        self.modified_timestamp
    }

    pub fn set_modified_timestamp(&mut self, timestamp: Option<i64>) {
        self.modified_timestamp = timestamp;
    }

    pub fn r#type(&self) -> BucketItemType {
        self.r#type
    }

    pub fn set_type(&mut self, item_type: BucketItemType) {
        self.r#type = item_type;
    }

    pub fn permissions(&self) -> Option<&Permissions> {
        self.permissions.as_ref()
    }

    pub fn set_permissions(&mut self, permissions: Option<Permissions>) {
        self.permissions = permissions;
    }

    /// Number of snapshots saved for this flow.
    pub fn version_count(&self) -> Option<i64> {
        self.version_count
    }

    pub fn set_version_count(&mut self, count: Option<i64>) -> Result<(), ValidationError> {
        if let Some(c) = count {
            VERSION_COUNT.check_int(c)?;
        }
        self.version_count = count;
        Ok(())
    }

    pub fn revision(&self) -> Option<&RevisionInfo> {
        self.revision.as_ref()
    }

    pub fn set_revision(&mut self, revision: Option<RevisionInfo>) {
        self.revision = revision;
    }
}

impl Record for VersionedFlow {
    fn schema() -> &'static Schema {
        &FLOW_SCHEMA
    }
}

/// Builder for [`VersionedFlow`]; `name` and `bucket_identifier` are required.
#[derive(Debug, Clone, Default)]
pub struct VersionedFlowBuilder {
    link: Option<Link>,
    identifier: Option<String>,
    name: Option<String>,
    description: Option<String>,
    bucket_identifier: Option<String>,
    bucket_name: Option<String>,
    created_timestamp: Option<i64>,
    modified_timestamp: Option<i64>,
    r#type: Option<BucketItemType>,
    permissions: Option<Permissions>,
    version_count: Option<i64>,
    revision: Option<RevisionInfo>,
}

impl VersionedFlowBuilder {
    pub fn link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn bucket_identifier(mut self, bucket: impl Into<String>) -> Self {
        self.bucket_identifier = Some(bucket.into());
        self
    }

    pub fn bucket_name(mut self, bucket_name: impl Into<String>) -> Self {
        self.bucket_name = Some(bucket_name.into());
        self
    }

    pub fn created_timestamp(mut self, timestamp: i64) -> Self {
        self.created_timestamp = Some(timestamp);
        self
    }

    pub fn modified_timestamp(mut self, timestamp: i64) -> Self {
        self.modified_timestamp = Some(timestamp);
        self
    }

    pub fn r#type(mut self, item_type: BucketItemType) -> Self {
        self.r#type = Some(item_type);
        self
    }

    pub fn permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = Some(permissions);
        self
    }

    pub fn version_count(mut self, count: i64) -> Self {
        self.version_count = Some(count);
        self
    }

    pub fn revision(mut self, revision: RevisionInfo) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn build(self) -> Result<VersionedFlow, ValidationError> {
        let name = NAME.require(self.name)?;
        NAME.check_str(&name)?;
        let mut flow = VersionedFlow {
            link: self.link,
            identifier: self.identifier,
            name,
            description: None,
            bucket_identifier: BUCKET_IDENTIFIER.require(self.bucket_identifier)?,
            bucket_name: self.bucket_name,
            created_timestamp: self.created_timestamp,
            modified_timestamp: self.modified_timestamp,
            r#type: TYPE.require(self.r#type)?,
            permissions: self.permissions,
            version_count: None,
            revision: self.revision,
        };
        flow.set_description(self.description)?;
        flow.set_version_count(self.version_count)?;
        Ok(flow)
    }
}

const META_LINK: Field = Field::record("link", "link", Link::schema);
const META_BUCKET_IDENTIFIER: Field =
    Field::string("bucket_identifier", "bucketIdentifier").required();
const META_FLOW_IDENTIFIER: Field = Field::string("flow_identifier", "flowIdentifier").required();
const META_VERSION: Field = Field::integer("version", "version").required().minimum(-1);
const META_TIMESTAMP: Field = Field::integer("timestamp", "timestamp");
const META_AUTHOR: Field = Field::string("author", "author");
const META_COMMENTS: Field = Field::string("comments", "comments").max_length(4096);

static METADATA_SCHEMA: Schema = Schema {
    name: "VersionedFlowSnapshotMetadata",
    fields: &[
        META_LINK,
        META_BUCKET_IDENTIFIER,
        META_FLOW_IDENTIFIER,
        META_VERSION,
        META_TIMESTAMP,
        META_AUTHOR,
        META_COMMENTS,
    ],
};

/// Metadata describing one saved version of a flow.
///
/// A version of `-1` asks the registry to assign the next version number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionedFlowSnapshotMetadata {
    link: Option<Link>,
    bucket_identifier: String,
    flow_identifier: String,
    version: i64,
    timestamp: Option<i64>,
    author: Option<String>,
    comments: Option<String>,
}

impl VersionedFlowSnapshotMetadata {
    /// Creates metadata for `version` of a flow in a bucket.
    pub fn new(
        bucket_identifier: impl Into<String>,
        flow_identifier: impl Into<String>,
        version: i64,
    ) -> Result<Self, ValidationError> {
        META_VERSION.check_int(version)?;
        Ok(Self {
            link: None,
            bucket_identifier: bucket_identifier.into(),
            flow_identifier: flow_identifier.into(),
            version,
            timestamp: None,
            author: None,
            comments: None,
        })
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    pub fn set_link(&mut self, link: Option<Link>) {
        self.link = link;
    }

    pub fn bucket_identifier(&self) -> &str {
        &self.bucket_identifier
    }

    pub fn set_bucket_identifier(&mut self, bucket: impl Into<String>) {
        self.bucket_identifier = bucket.into();
    }

    pub fn flow_identifier(&self) -> &str {
        &self.flow_identifier
    }

    pub fn set_flow_identifier(&mut self, flow: impl Into<String>) {
        self.flow_identifier = flow.into();
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn set_version(&mut self, version: i64) -> Result<(), ValidationError> {
        META_VERSION.check_int(version)?;
        self.version = version;
        Ok(())
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: Option<i64>) {
        self.timestamp = timestamp;
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn set_author(&mut self, author: Option<String>) {
        self.author = author;
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    pub fn set_comments(&mut self, comments: Option<String>) -> Result<(), ValidationError> {
        if let Some(c) = &comments {
            META_COMMENTS.check_str(c)?;
        }
        self.comments = comments;
        Ok(())
    }
}

impl Record for VersionedFlowSnapshotMetadata {
    fn schema() -> &'static Schema {
        &METADATA_SCHEMA
    }
}
