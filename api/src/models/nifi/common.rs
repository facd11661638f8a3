//! Revision, position and permission records shared by NiFi components.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::record::{Field, Record, Schema};

const CLIENT_ID: Field = Field::string("client_id", "clientId");
const VERSION: Field = Field::integer("version", "version").minimum(0);
const LAST_MODIFIER: Field = Field::string("last_modifier", "lastModifier");

static REVISION_SCHEMA: Schema = Schema {
    name: "RevisionDTO",
    fields: &[CLIENT_ID, VERSION, LAST_MODIFIER],
};

/// Component revision used for optimistic locking.
///
/// Every mutating NiFi request must echo the revision last read; the server
/// rejects stale versions with 409.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionDto {
    client_id: Option<String>,
    version: Option<i64>,
    last_modifier: Option<String>,
}

impl RevisionDto {
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

impl Record for RevisionDto {
    fn schema() -> &'static Schema {
        &REVISION_SCHEMA
    }
}

const X: Field = Field::number("x", "x");
const Y: Field = Field::number("y", "y");

static POSITION_SCHEMA: Schema = Schema {
    name: "PositionDTO",
    fields: &[X, Y],
};

/// Canvas coordinates of a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionDto {
    x: Option<f64>,
    y: Option<f64>,
}

impl PositionDto {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn x(&self) -> Option<f64> {
        self.x
    }

    pub fn set_x(&mut self, x: Option<f64>) {
        self.x = x;
    }

    pub fn y(&self) -> Option<f64> {
        self.y
    }

    pub fn set_y(&mut self, y: Option<f64>) {
        self.y = y;
    }
}

impl Record for PositionDto {
    fn schema() -> &'static Schema {
        &POSITION_SCHEMA
    }
}

const CAN_READ: Field = Field::boolean("can_read", "canRead");
const CAN_WRITE: Field = Field::boolean("can_write", "canWrite");

static PERMISSIONS_SCHEMA: Schema = Schema {
    name: "PermissionsDTO",
    fields: &[CAN_READ, CAN_WRITE],
};

/// The caller's access to a NiFi component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsDto {
    can_read: Option<bool>,
    can_write: Option<bool>,
}

impl PermissionsDto {
    pub fn new(can_read: bool, can_write: bool) -> Self {
        Self {
            can_read: Some(can_read),
            can_write: Some(can_write),
        }
    }

    pub fn can_read(&self) -> Option<bool> {
        self.can_read
    }

    pub fn set_can_read(&mut self, can_read: Option<bool>) {
        self.can_read = can_read;
    }

    pub fn can_write(&self) -> Option<bool> {
        self.can_write
    }

    pub fn set_can_write(&mut self, can_write: Option<bool>) {
        self.can_write = can_write;
    }
}

impl Record for PermissionsDto {
    fn schema() -> &'static Schema {
        &PERMISSIONS_SCHEMA
    }
}
