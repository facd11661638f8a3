//! Deterministic patches for NiFi and NiFi Registry OpenAPI documents.
//!
//! Every patch is a pure function over a [`serde_json::Value`] and is
//! idempotent: applying it to its own output changes nothing. Missing
//! containers are created, and patches whose target is absent are skipped
//! without error.
//!
//! ```
//! use augment_lib::{normalize_enums, Augmentation};
//! use serde_json::json;
//!
//! let mut doc = json!({ "enum": ["A,B", "B"] });
//! normalize_enums(&mut doc);
//! assert_eq!(doc, json!({ "enum": ["A", "B"] }));
//!
//! Augmentation::NifiSecurity.apply(&mut doc);
//! assert_eq!(doc["security"], json!([{ "bearerAuth": [] }]));
//! ```

pub mod document;
pub mod enums;
pub mod error;
pub mod security;
pub mod widen;

use std::path::Path;

use serde_json::Value;
use tracing::info;

pub use enums::normalize_enums;
pub use error::{AugmentError, Result};
pub use security::{
    HttpScheme, LoginOperation, NIFI_SECURITY, REGISTRY_SECURITY, SecurityProfile, apply_security,
    resolve_path,
};
pub use widen::{EnumWidening, PROCESSOR_STATE, widen_enum};

/// The four document patches shipped as command-line tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Augmentation {
    /// Bearer scheme, global requirement and anonymous token endpoint for NiFi.
    NifiSecurity,
    /// Bearer and basic schemes for NiFi Registry.
    RegistrySecurity,
    /// Comma-joined and duplicated `enum` entries.
    NormalizeEnums,
    /// `ProcessorDTO.state` widened to the values of `physicalState`.
    ProcessorStateEnum,
}

impl Augmentation {
    pub fn apply(self, doc: &mut Value) {
        match self {
            Augmentation::NifiSecurity => {
                apply_security(doc, &NIFI_SECURITY);
            }
            Augmentation::RegistrySecurity => {
                apply_security(doc, &REGISTRY_SECURITY);
            }
            Augmentation::NormalizeEnums => {
                normalize_enums(doc);
            }
            Augmentation::ProcessorStateEnum => {
                widen_enum(doc, &PROCESSOR_STATE);
            }
        }
    }
}

/// Loads `input`, applies `augmentation` and writes the result to `output`.
///
/// The output file is only touched once the whole document has been
/// transformed and serialized; `input` and `output` may be the same path.
pub fn augment_file(input: &Path, output: &Path, augmentation: Augmentation) -> Result<()> {
    let mut doc = document::load(input)?;
    augmentation.apply(&mut doc);
    document::save(output, &doc)?;
    info!(
        ?augmentation,
        input = %input.display(),
        output = %output.display(),
        "document augmented"
    );
    Ok(())
}
