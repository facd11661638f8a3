//! Records of the NiFi Registry REST API.

mod access;
mod bucket;
mod common;
mod flow;

pub use access::{AccessPolicy, CurrentUser, PolicyAction, RegistryAbout, Tenant};
pub use bucket::{Bucket, BucketBuilder};
pub use common::{Link, Permissions, ResourcePermissions, RevisionInfo};
pub use flow::{BucketItemType, VersionedFlow, VersionedFlowBuilder, VersionedFlowSnapshotMetadata};
