//! Typed REST bindings for Apache NiFi and NiFi Registry.
//!
//! The crate has two layers:
//!
//! - **Records** ([`models`]): data transfer objects implementing the
//!   [`Record`] contract. Every record carries a static schema of its
//!   fields; setters, builders and decoding all validate against it, so an
//!   instance that exists is one that satisfies its declared constraints.
//! - **Bindings** ([`apis`]): [`NifiApi`] and [`RegistryApi`] execute
//!   typed [`Endpoint`]s through an [`ApiClient`] that handles credentials,
//!   TLS trust and status mapping.
//!
//! ## Example
//!
//! ```rust,ignore
//! use nifi_api::{ApiClient, NifiApi};
//! use nifi_api::models::nifi::{ProcessorRunStatusEntity, RunState};
//! use url::Url;
//!
//! let client = ApiClient::new(Url::parse("https://localhost:8443/nifi-api")?)?;
//! let nifi = NifiApi::new(client);
//! let nifi = nifi.with_token(nifi.create_access_token("admin", "secret").await?);
//!
//! let processor = nifi.get_processor(id).await?;
//! let revision = processor.revision().cloned().unwrap_or_default();
//! let request = ProcessorRunStatusEntity::new(revision, RunState::Running);
//! nifi.update_run_status(id, &request).await?;
//! ```

pub mod apis;
pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod models;
pub mod record;
pub mod response;

pub use apis::{NifiApi, RegistryApi};
pub use auth::ApiAuth;
pub use client::{ApiClient, ApiClientBuilder};
pub use endpoint::{Endpoint, EndpointBuilder, RequestArgs, RequestBody};
pub use error::{ApiError, AuthError, ClientError, ConfigError, ValidationError};
pub use method::HttpMethod;
pub use record::{Field, Kind, Record, Schema};
pub use response::ResponseFormat;
