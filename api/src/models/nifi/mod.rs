//! Records of the NiFi REST API.
//!
//! Wire schema names keep NiFi's `DTO` suffix (`ProcessorDTO`); the Rust
//! types use `Dto`.

mod about;
mod common;
mod process_group;
mod processor;

pub use about::{AboutDto, AboutEntity};
pub use common::{PermissionsDto, PositionDto, RevisionDto};
pub use process_group::{
    FlowSnippetDto, ProcessGroupDto, ProcessGroupEntity, ScheduleComponentsEntity, ScheduledState,
    VersionControlInformationDto, VersionControlState,
};
pub use processor::{
    ProcessorDto, ProcessorEntity, ProcessorRunStatusEntity, ProcessorState, RunState,
    ValidationStatus,
};
