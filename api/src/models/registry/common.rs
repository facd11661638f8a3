//! Small records embedded in most registry resources.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::record::{Field, Kind, Record, Schema};

const STRING_KIND: Kind = Kind::String;

const HREF: Field = Field::string("href", "href");
const PARAMS: Field = Field::map("params", "params", &STRING_KIND);

static LINK_SCHEMA: Schema = Schema {
    name: "Link",
    fields: &[HREF, PARAMS],
};

/// A hypermedia link to the resource it is attached to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    href: Option<String>,
    params: Option<HashMap<String, String>>,
}

impl Link {
    /// Creates a link pointing at `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            params: None,
        }
    }

    /// Returns the link target.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Sets the link target.
    pub fn set_href(&mut self, href: Option<String>) {
        self.href = href;
    }

    /// Returns the link parameters (`rel`, `type`, ...).
    pub fn params(&self) -> Option<&HashMap<String, String>> {
        self.params.as_ref()
    }

    /// Sets the link parameters.
    pub fn set_params(&mut self, params: Option<HashMap<String, String>>) {
        self.params = params;
    }
}

impl Record for Link {
    fn schema() -> &'static Schema {
        &LINK_SCHEMA
    }
}

const CAN_READ: Field = Field::boolean("can_read", "canRead");
const CAN_WRITE: Field = Field::boolean("can_write", "canWrite");
const CAN_DELETE: Field = Field::boolean("can_delete", "canDelete");

static PERMISSIONS_SCHEMA: Schema = Schema {
    name: "Permissions",
    fields: &[CAN_READ, CAN_WRITE, CAN_DELETE],
};

/// The caller's access to a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    can_read: Option<bool>,
    can_write: Option<bool>,
    can_delete: Option<bool>,
}

impl Permissions {
    /// Creates a permission set with every flag given.
    pub fn new(can_read: bool, can_write: bool, can_delete: bool) -> Self {
        Self {
            can_read: Some(can_read),
            can_write: Some(can_write),
            can_delete: Some(can_delete),
        }
    }

    /// Whether the resource may be read.
    pub fn can_read(&self) -> Option<bool> {
        self.can_read
    }

    /// Sets the read flag.
    pub fn set_can_read(&mut self, can_read: Option<bool>) {
        self.can_read = can_read;
    }

    /// Whether the resource may be modified.
    pub fn can_write(&self) -> Option<bool> {
        self.can_write
    }

    /// Sets the write flag.
    pub fn set_can_write(&mut self, can_write: Option<bool>) {
        self.can_write = can_write;
    }

    /// Whether the resource may be deleted.
    pub fn can_delete(&self) -> Option<bool> {
        self.can_delete
    }

    /// Sets the delete flag.
    pub fn set_can_delete(&mut self, can_delete: Option<bool>) {
        self.can_delete = can_delete;
    }
}

impl Record for Permissions {
    fn schema() -> &'static Schema {
        &PERMISSIONS_SCHEMA
    }
}

const BUCKETS: Field = Field::record("buckets", "buckets", Permissions::schema);
const TENANTS: Field = Field::record("tenants", "tenants", Permissions::schema);
const POLICIES: Field = Field::record("policies", "policies", Permissions::schema);
const PROXY: Field = Field::record("proxy", "proxy", Permissions::schema);

static RESOURCE_PERMISSIONS_SCHEMA: Schema = Schema {
    name: "ResourcePermissions",
    fields: &[BUCKETS, TENANTS, POLICIES, PROXY],
};

/// Top-level permissions of the current user, per resource family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePermissions {
    buckets: Option<Permissions>,
    tenants: Option<Permissions>,
    policies: Option<Permissions>,
    proxy: Option<Permissions>,
}

impl ResourcePermissions {
    pub fn buckets(&self) -> Option<&Permissions> {
        self.buckets.as_ref()
    }

    pub fn set_buckets(&mut self, buckets: Option<Permissions>) {
        self.buckets = buckets;
    }

    pub fn tenants(&self) -> Option<&Permissions> {
        self.tenants.as_ref()
    }

    pub fn set_tenants(&mut self, tenants: Option<Permissions>) {
        self.tenants = tenants;
    }

    pub fn policies(&self) -> Option<&Permissions> {
        self.policies.as_ref()
    }

    pub fn set_policies(&mut self, policies: Option<Permissions>) {
        self.policies = policies;
    }

    pub fn proxy(&self) -> Option<&Permissions> {
        self.proxy.as_ref()
    }

    pub fn set_proxy(&mut self, proxy: Option<Permissions>) {
        self.proxy = proxy;
    }
}

impl Record for ResourcePermissions {
    fn schema() -> &'static Schema {
        &RESOURCE_PERMISSIONS_SCHEMA
    }
}

const CLIENT_ID: Field = Field::string("client_id", "clientId");
const VERSION: Field = Field::integer("version", "version").minimum(0);
const LAST_MODIFIER: Field = Field::string("last_modifier", "lastModifier");

static REVISION_INFO_SCHEMA: Schema = Schema {
    name: "RevisionInfo",
    fields: &[CLIENT_ID, VERSION, LAST_MODIFIER],
};

/// Optimistic-locking revision of a registry resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    client_id: Option<String>,
    version: Option<i64>,
    last_modifier: Option<String>,
}

impl RevisionInfo {
    /// Creates a revision at `version`.
    pub fn new(version: i64) -> Result<Self, ValidationError> {
        let mut revision = Self::default();
        revision.set_version(Some(version))?;
        Ok(revision)
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn set_client_id(&mut self, client_id: Option<String>) {
        self.client_id = client_id;
    }

    pub fn version(&self) -> Option<i64> {
        self.version
    }

    /// Sets the revision number, which must not be negative.
    pub fn set_version(&mut self, version: Option<i64>) -> Result<(), ValidationError> {
        if let Some(v) = version {
            VERSION.check_int(v)?;
        }
        self.version = version;
        Ok(())
    }

    pub fn last_modifier(&self) -> Option<&str> {
        self.last_modifier.as_deref()
    }

    pub fn set_last_modifier(&mut self, last_modifier: Option<String>) {
        self.last_modifier = last_modifier;
    }
}

impl Record for RevisionInfo {
    fn schema() -> &'static Schema {
        &REVISION_INFO_SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_rejects_negative_version() {
        let err = RevisionInfo::new(-1).unwrap_err();
        assert!(matches!(err, ValidationError::BelowMinimum { field: "version", minimum: 0 }));
    }

    #[test]
    fn test_link_params_round_trip() {
        let mut link = Link::new("buckets/abc");
        link.set_params(Some(HashMap::from([("rel".to_string(), "self".to_string())])));
        let restored = Link::from_mapping(link.to_mapping()).unwrap();
        assert_eq!(restored, link);
    }

    #[test]
    fn test_nested_permissions_mapping() {
        let mut perms = ResourcePermissions::default();
        perms.set_buckets(Some(Permissions::new(true, false, false)));
        let map = perms.to_mapping();
        assert_eq!(map["buckets"]["canRead"], true);
        assert!(map["proxy"].is_null());
    }
}
