//! Client and endpoint configuration errors.

use thiserror::Error;

use crate::method::HttpMethod;

/// Errors in client or endpoint configuration.
///
/// These indicate programmer errors or invalid settings and surface before
/// any request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A header name or value could not be encoded.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header problem.
        message: String,
    },

    /// A PEM certificate could not be loaded.
    #[error("Invalid certificate: {message}")]
    InvalidCertificate {
        /// Description of the certificate problem.
        message: String,
    },

    /// A path template parameter was not supplied.
    #[error("Missing path parameter `{name}` for {path}")]
    MissingPathParam {
        /// The parameter name.
        name: String,
        /// The path template.
        path: String,
    },

    /// A path parameter value would not address a single path segment.
    #[error("Invalid value {value:?} for path parameter `{name}`")]
    InvalidPathParam { name: String, value: String },

    /// A request body was supplied for a method that does not carry one.
    #[error("{method} {endpoint} does not accept a request body")]
    BodyNotAllowed {
        method: HttpMethod,
        endpoint: &'static str,
    },
}

impl ConfigError {
    /// Creates an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }
}
