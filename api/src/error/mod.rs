//! Layered error types for the client crate.
//!
//! - [`ApiError`] - Top-level error type for all client operations
//! - [`ValidationError`] - Record constraint violations and response decoding errors
//! - [`ClientError`] - HTTP client and network errors
//! - [`AuthError`] - Authentication and authorization errors
//! - [`ConfigError`] - Client and endpoint configuration errors

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use validation_error::ValidationError;
