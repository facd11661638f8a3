//! Transport failures and unexpected statuses.

use thiserror::Error;

/// Errors raised while talking to a NiFi or Registry server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("request to server failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a status the bindings do not map to a more
    /// specific error.
    #[error("server returned {status}: {body}")]
    Status {
        status: u16,
        /// Response body as text; NiFi puts its error message here.
        body: String,
    },

    #[error("no response within {duration_ms}ms")]
    Timeout { duration_ms: u64 },
}

impl ClientError {
    /// NiFi answers 409 when the revision sent with a mutation is stale or
    /// the component is still transitioning between states.
    pub fn is_revision_conflict(&self) -> bool {
        matches!(self, Self::Status { status: 409, .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// Whether sending the same request again may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Status { status, .. } => matches!(status, 409 | 429 | 500..=599),
            Self::Request(err) => err.is_connect() || err.is_timeout(),
        }
    }

    /// The status received, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|status| status.as_u16()),
            Self::Timeout { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16) -> ClientError {
        ClientError::Status {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn stale_revision_is_a_transient_conflict() {
        let err = ClientError::Status {
            status: 409,
            body: "Stale revision for processor p-1".to_string(),
        };
        assert!(err.is_revision_conflict());
        assert!(err.is_transient());
        assert_eq!(err.to_string(), "server returned 409: Stale revision for processor p-1");
    }

    #[test]
    fn server_errors_are_transient() {
        assert!(status(503).is_transient());
        assert!(status(429).is_transient());
        assert!(!status(400).is_transient());
    }

    #[test]
    fn missing_component() {
        let err = status(404);
        assert!(err.is_not_found());
        assert!(!err.is_transient());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn timeout_has_no_status() {
        let err = ClientError::Timeout { duration_ms: 250 };
        assert!(err.is_transient());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "no response within 250ms");
    }
}
