use std::path::PathBuf;

/// Configuration problems that stop the probe before any request is sent.
///
/// Failed attempts against a service are not errors; they are reported as
/// [`Attempt::NotReady`](crate::probe::Attempt::NotReady).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {name} is not set")]
    MissingVariable { name: &'static str },

    #[error("{name} is not a valid http(s) URL: {value}")]
    InvalidEndpoint { name: &'static str, value: String },

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("MTLS_CLIENT_CERT and MTLS_CLIENT_KEY must be set together")]
    IncompleteIdentity,

    #[error("failed to read {}: {source}", path.display())]
    TlsMaterial {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no usable certificates in {}", path.display())]
    InvalidCertificate { path: PathBuf },

    #[error("invalid client certificate or key: {0}")]
    InvalidIdentity(#[source] reqwest::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ConfigError {
    /// Process exit code for this error: 2 for missing or malformed
    /// settings, 1 for TLS material or client setup failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::MissingVariable { .. }
            | ConfigError::InvalidEndpoint { .. }
            | ConfigError::InvalidValue { .. }
            | ConfigError::IncompleteIdentity => 2,
            ConfigError::TlsMaterial { .. }
            | ConfigError::InvalidCertificate { .. }
            | ConfigError::InvalidIdentity(_)
            | ConfigError::Client(_) => 1,
        }
    }
}
