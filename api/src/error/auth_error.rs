//! Authentication and authorization errors.

use thiserror::Error;

/// Errors related to authenticating against a service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential is configured for a call that needs one.
    #[error("Missing credential for {service}")]
    MissingCredential {
        /// The service that requires the credential.
        service: String,
    },

    /// Server rejected the credentials (HTTP 401).
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error message from the server.
        message: String,
    },

    /// The authenticated identity may not perform the operation (HTTP 403).
    #[error("Insufficient permissions: {operation}")]
    InsufficientPermissions {
        /// The endpoint id that was denied.
        operation: String,
    },
}

impl AuthError {
    /// Returns `true` if a fresh login might resolve this error.
    pub fn is_refreshable(&self) -> bool {
        matches!(self, Self::AuthenticationFailed { .. })
    }
}
