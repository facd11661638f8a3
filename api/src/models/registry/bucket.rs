//! Registry buckets.

use serde::{Deserialize, Serialize};

use super::{Link, Permissions, RevisionInfo};
use crate::error::ValidationError;
use crate::record::{Field, Record, Schema};

const LINK: Field = Field::record("link", "link", Link::schema);
const IDENTIFIER: Field = Field::string("identifier", "identifier");
const NAME: Field = Field::string("name", "name").required().length(1, 1000);
const CREATED_TIMESTAMP: Field = Field::integer("created_timestamp", "createdTimestamp");
const DESCRIPTION: Field = Field::string("description", "description").max_length(4096);
const ALLOW_BUNDLE_REDEPLOY: Field =
    Field::boolean("allow_bundle_redeploy", "allowBundleRedeploy");
const ALLOW_PUBLIC_READ: Field = Field::boolean("allow_public_read", "allowPublicRead");
const PERMISSIONS: Field = Field::record("permissions", "permissions", Permissions::schema);
const REVISION: Field = Field::record("revision", "revision", RevisionInfo::schema);

static SCHEMA: Schema = Schema {
    name: "Bucket",
    fields: &[
        LINK,
        IDENTIFIER,
        NAME,
        CREATED_TIMESTAMP,
        DESCRIPTION,
        ALLOW_BUNDLE_REDEPLOY,
        ALLOW_PUBLIC_READ,
        PERMISSIONS,
        REVISION,
    ],
};

/// A named container of versioned flows and extension bundles.
///
/// ## Examples
///
/// ```rust
/// use nifi_api::Record;
/// use nifi_api::models::registry::Bucket;
///
/// let bucket = Bucket::builder().name("shared").description("team flows").build().unwrap();
/// assert_eq!(bucket.to_mapping()["name"], "shared");
///
/// assert!(Bucket::builder().build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    link: Option<Link>,
    identifier: Option<String>,
    name: String,
    created_timestamp: Option<i64>,
    description: Option<String>,
    allow_bundle_redeploy: Option<bool>,
    allow_public_read: Option<bool>,
    permissions: Option<Permissions>,
    revision: Option<RevisionInfo>,
}

impl Bucket {
    /// Creates a builder with every field unset.
    pub fn builder() -> BucketBuilder {
        BucketBuilder::default()
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    pub fn set_link(&mut self, link: Option<Link>) {
        self.link = link;
    }

    /// Server-assigned identifier, absent until the bucket is created.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn set_identifier(&mut self, identifier: Option<String>) {
        self.identifier = identifier;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the bucket. Names must be 1 to 1000 characters.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        NAME.check_str(&name)?;
        self.name = name;
        Ok(())
    }

    /// Creation time in milliseconds since the epoch.
    pub fn created_timestamp(&self) -> Option<i64> {
        self.created_timestamp
    }

    pub fn set_created_timestamp(&mut self, created_timestamp: Option<i64>) {
        self.created_timestamp = created_timestamp;
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

    pub fn allow_bundle_redeploy(&self) -> Option<bool> {
        self.allow_bundle_redeploy
    }

    pub fn set_allow_bundle_redeploy(&mut self, allow: Option<bool>) {
        self.allow_bundle_redeploy = allow;
    }

    pub fn allow_public_read(&self) -> Option<bool> {
        self.allow_public_read
    }

    pub fn set_allow_public_read(&mut self, allow: Option<bool>) {
        self.allow_public_read = allow;
    }

    pub fn permissions(&self) -> Option<&Permissions> {
        self.permissions.as_ref()
    }

    pub fn set_permissions(&mut self, permissions: Option<Permissions>) {
        self.permissions = permissions;
    }

    pub fn revision(&self) -> Option<&RevisionInfo> {
        self.revision.as_ref()
    }

    pub fn set_revision(&mut self, revision: Option<RevisionInfo>) {
        self.revision = revision;
    }
}

impl Record for Bucket {
    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

/// Builder for [`Bucket`]; `name` is required.
#[derive(Debug, Clone, Default)]
pub struct BucketBuilder {
    link: Option<Link>,
    identifier: Option<String>,
    name: Option<String>,
    created_timestamp: Option<i64>,
    description: Option<String>,
    allow_bundle_redeploy: Option<bool>,
    allow_public_read: Option<bool>,
    permissions: Option<Permissions>,
    revision: Option<RevisionInfo>,
}

impl BucketBuilder {
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

    pub fn created_timestamp(mut self, created_timestamp: i64) -> Self {
        self.created_timestamp = Some(created_timestamp);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn allow_bundle_redeploy(mut self, allow: bool) -> Self {
        self.allow_bundle_redeploy = Some(allow);
        self
    }

    pub fn allow_public_read(mut self, allow: bool) -> Self {
        self.allow_public_read = Some(allow);
        self
    }

    pub fn permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = Some(permissions);
        self
    }

    pub fn revision(mut self, revision: RevisionInfo) -> Self {
        self.revision = Some(revision);
        self
    }

    /// Validates every supplied field and builds the bucket.
    pub fn build(self) -> Result<Bucket, ValidationError> {
        let name = NAME.require(self.name)?;
        NAME.check_str(&name)?;
        let mut bucket = Bucket {
            link: self.link,
            identifier: self.identifier,
            name,
            created_timestamp: self.created_timestamp,
            description: None,
            allow_bundle_redeploy: self.allow_bundle_redeploy,
            allow_public_read: self.allow_public_read,
            permissions: self.permissions,
            revision: self.revision,
        };
        bucket.set_description(self.description)?;
        Ok(bucket)
    }
}
