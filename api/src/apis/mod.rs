//! Typed bindings for the operations this crate exposes.
//!
//! [`NifiApi`] targets a NiFi API root (`https://host:8443/nifi-api`) and
//! [`RegistryApi`] a Registry API root
//! (`https://host:18443/nifi-registry-api`). Both wrap an [`ApiClient`]
//! and can be re-bound to a freshly issued token with `with_token`.
//!
//! [`ApiClient`]: crate::ApiClient

mod nifi;
mod registry;

pub use nifi::NifiApi;
pub use registry::RegistryApi;

use crate::error::{ApiError, ValidationError};

/// Trims an issued token, rejecting an empty body.
fn non_empty_token(token: String) -> Result<String, ApiError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ValidationError::EmptyBody.into());
    }
    Ok(token.to_string())
}
