//! Tenants, access policies and the current user.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use super::{ResourcePermissions, RevisionInfo};
use crate::error::ValidationError;
use crate::record::{Field, Kind, Record, Schema};

const TENANT_IDENTIFIER: Field = Field::string("identifier", "identifier");
const TENANT_IDENTITY: Field = Field::string("identity", "identity").required().min_length(1);
const TENANT_CONFIGURABLE: Field = Field::boolean("configurable", "configurable");
const TENANT_REVISION: Field = Field::record("revision", "revision", RevisionInfo::schema);

static TENANT_SCHEMA: Schema = Schema {
    name: "Tenant",
    fields: &[
        TENANT_IDENTIFIER,
        TENANT_IDENTITY,
        TENANT_CONFIGURABLE,
        TENANT_REVISION,
    ],
};

/// A user or user group known to the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    identifier: Option<String>,
    identity: String,
    configurable: Option<bool>,
    revision: Option<RevisionInfo>,
}

impl Tenant {
    /// Creates a tenant for a non-empty identity.
    pub fn new(identity: impl Into<String>) -> Result<Self, ValidationError> {
        let identity = identity.into();
        TENANT_IDENTITY.check_str(&identity)?;
        Ok(Self {
            identifier: None,
            identity,
            configurable: None,
            revision: None,
        })
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn set_identifier(&mut self, identifier: Option<String>) {
        self.identifier = identifier;
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn set_identity(&mut self, identity: impl Into<String>) -> Result<(), ValidationError> {
        let identity = identity.into();
        TENANT_IDENTITY.check_str(&identity)?;
        self.identity = identity;
        Ok(())
    }

    /// Whether the tenant is managed by a configurable provider.
    pub fn configurable(&self) -> Option<bool> {
        self.configurable
    }

    pub fn set_configurable(&mut self, configurable: Option<bool>) {
        self.configurable = configurable;
    }

    pub fn revision(&self) -> Option<&RevisionInfo> {
        self.revision.as_ref()
    }

    pub fn set_revision(&mut self, revision: Option<RevisionInfo>) {
        self.revision = revision;
    }
}

impl Record for Tenant {
    fn schema() -> &'static Schema {
        &TENANT_SCHEMA
    }
}

/// Action an access policy grants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PolicyAction {
    Read,
    Write,
    Delete,
}

const TENANT_KIND: Kind = Kind::Record(Tenant::schema);

const POLICY_IDENTIFIER: Field = Field::string("identifier", "identifier");
const POLICY_RESOURCE: Field = Field::string("resource", "resource").required();
const POLICY_ACTION: Field = Field::enumeration("action", "action", PolicyAction::VARIANTS).required();
const POLICY_CONFIGURABLE: Field = Field::boolean("configurable", "configurable");
const POLICY_USERS: Field = Field::list("users", "users", &TENANT_KIND);
const POLICY_USER_GROUPS: Field = Field::list("user_groups", "userGroups", &TENANT_KIND);
const POLICY_REVISION: Field = Field::record("revision", "revision", RevisionInfo::schema);

static POLICY_SCHEMA: Schema = Schema {
    name: "AccessPolicy",
    fields: &[
        POLICY_IDENTIFIER,
        POLICY_RESOURCE,
        POLICY_ACTION,
        POLICY_CONFIGURABLE,
        POLICY_USERS,
        POLICY_USER_GROUPS,
        POLICY_REVISION,
    ],
};

/// Grants an action on a resource path (for example `/buckets/<id>`) to
/// users and groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPolicy {
    identifier: Option<String>,
    resource: String,
    action: PolicyAction,
    configurable: Option<bool>,
    users: Option<Vec<Tenant>>,
    user_groups: Option<Vec<Tenant>>,
    revision: Option<RevisionInfo>,
}

impl AccessPolicy {
    /// Creates a policy granting `action` on `resource` to nobody yet.
    pub fn new(resource: impl Into<String>, action: PolicyAction) -> Self {
        Self {
            identifier: None,
            resource: resource.into(),
            action,
            configurable: None,
            users: None,
            user_groups: None,
            revision: None,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn set_identifier(&mut self, identifier: Option<String>) {
        self.identifier = identifier;
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn set_resource(&mut self, resource: impl Into<String>) {
        self.resource = resource.into();
    }

    pub fn action(&self) -> PolicyAction {
        self.action
    }

    pub fn set_action(&mut self, action: PolicyAction) {
        self.action = action;
    }

    pub fn configurable(&self) -> Option<bool> {
        self.configurable
    }

    pub fn set_configurable(&mut self, configurable: Option<bool>) {
        self.configurable = configurable;
    }

    pub fn users(&self) -> Option<&[Tenant]> {
        self.users.as_deref()
    }

    pub fn set_users(&mut self, users: Option<Vec<Tenant>>) {
        self.users = users;
    }

    pub fn user_groups(&self) -> Option<&[Tenant]> {
        self.user_groups.as_deref()
    }

    pub fn set_user_groups(&mut self, groups: Option<Vec<Tenant>>) {
        self.user_groups = groups;
    }

    pub fn revision(&self) -> Option<&RevisionInfo> {
        self.revision.as_ref()
    }

    pub fn set_revision(&mut self, revision: Option<RevisionInfo>) {
        self.revision = revision;
    }
}

impl Record for AccessPolicy {
    fn schema() -> &'static Schema {
        &POLICY_SCHEMA
    }
}

const USER_IDENTITY: Field = Field::string("identity", "identity").required();
const USER_ANONYMOUS: Field = Field::boolean("anonymous", "anonymous");
const USER_LOGIN_SUPPORTED: Field = Field::boolean("login_supported", "loginSupported");
const USER_RESOURCE_PERMISSIONS: Field = Field::record(
    "resource_permissions",
    "resourcePermissions",
    ResourcePermissions::schema,
);

static CURRENT_USER_SCHEMA: Schema = Schema {
    name: "CurrentUser",
    fields: &[
        USER_IDENTITY,
        USER_ANONYMOUS,
        USER_LOGIN_SUPPORTED,
        USER_RESOURCE_PERMISSIONS,
    ],
};

/// The identity the registry resolved for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    identity: String,
    anonymous: Option<bool>,
    login_supported: Option<bool>,
    resource_permissions: Option<ResourcePermissions>,
}

impl CurrentUser {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            anonymous: None,
            login_supported: None,
            resource_permissions: None,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn anonymous(&self) -> Option<bool> {
        self.anonymous
    }

    pub fn set_anonymous(&mut self, anonymous: Option<bool>) {
        self.anonymous = anonymous;
    }

    pub fn login_supported(&self) -> Option<bool> {
        self.login_supported
    }

    pub fn set_login_supported(&mut self, supported: Option<bool>) {
        self.login_supported = supported;
    }

    pub fn resource_permissions(&self) -> Option<&ResourcePermissions> {
        self.resource_permissions.as_ref()
    }

    pub fn set_resource_permissions(&mut self, permissions: Option<ResourcePermissions>) {
        self.resource_permissions = permissions;
    }
}

impl Record for CurrentUser {
    fn schema() -> &'static Schema {
        &CURRENT_USER_SCHEMA
    }
}

const ABOUT_VERSION: Field = Field::string("registry_about_version", "registryAboutVersion");

static ABOUT_SCHEMA: Schema = Schema {
    name: "RegistryAbout",
    fields: &[ABOUT_VERSION],
};

/// Version information reported by the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryAbout {
    registry_about_version: Option<String>,
}

impl RegistryAbout {
    pub fn registry_about_version(&self) -> Option<&str> {
        self.registry_about_version.as_deref()
    }

    pub fn set_registry_about_version(&mut self, version: Option<String>) {
        self.registry_about_version = version;
    }
}

impl Record for RegistryAbout {
    fn schema() -> &'static Schema {
        &ABOUT_SCHEMA
    }
}
