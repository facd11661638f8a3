//! HTTP client module.
//!
//! [`ApiClient`] executes [`Endpoint`](crate::Endpoint)s against one
//! service's API root, attaching credentials and recording a tracing span
//! per request.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use nifi_api::{ApiClient, Endpoint, HttpMethod, RequestArgs};
//! use nifi_api::models::nifi::ProcessorEntity;
//! use nifi_api::response::RecordFormat;
//! use url::Url;
//!
//! let client = ApiClient::new(Url::parse("https://localhost:8443/nifi-api")?)?;
//!
//! let endpoint: Endpoint<RecordFormat<ProcessorEntity>> = Endpoint::builder()
//!     .id("getProcessor")
//!     .method(HttpMethod::Get)
//!     .path("/processors/{id}")
//!     .build();
//!
//! let processor = client
//!     .execute(&endpoint, RequestArgs::new().param("id", processor_id))
//!     .await?;
//! ```

mod executor;

pub use executor::{ApiClient, ApiClientBuilder};
