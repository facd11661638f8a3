//! Endpoint definitions and per-call request arguments.
//!
//! An [`Endpoint`] is a static description of one REST operation: its id,
//! method, path template and, through its type parameter, how the response
//! body is parsed. The values that change per call (path parameters, query
//! pairs and the body) travel separately in [`RequestArgs`].

use std::marker::PhantomData;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;
use url::Url;

use crate::error::ConfigError;
use crate::method::HttpMethod;
use crate::record::Record;
use crate::response::ResponseFormat;

/// Everything except RFC 3986 unreserved characters, so a value always
/// stays inside its own path segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Placeholder for a builder field that has not been set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Missing;

/// A REST endpoint whose response is parsed with `F`.
///
/// ## Examples
///
/// ```rust,ignore
/// use nifi_api::{Endpoint, HttpMethod};
/// use nifi_api::models::registry::Bucket;
/// use nifi_api::response::RecordFormat;
///
/// let get_bucket: Endpoint<RecordFormat<Bucket>> = Endpoint::builder()
///     .id("getBucket")
///     .method(HttpMethod::Get)
///     .path("/buckets/{bucketId}")
///     .build();
/// ```
#[derive(Debug)]
pub struct Endpoint<F: ResponseFormat> {
    id: &'static str,
    method: HttpMethod,
    path: &'static str,
    description: Option<&'static str>,
    _format: PhantomData<F>,
}

impl<F: ResponseFormat> Clone for Endpoint<F> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            method: self.method,
            path: self.path,
            description: self.description,
            _format: PhantomData,
        }
    }
}

impl<F: ResponseFormat> Endpoint<F> {
    pub fn builder() -> EndpointBuilder<Missing, Missing, Missing, F> {
        EndpointBuilder {
            id: Missing,
            method: Missing,
            path: Missing,
            description: None,
            _format: PhantomData,
        }
    }

    /// The operation id, as published in the upstream OpenAPI document.
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The path template, relative to the service's API root.
    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn description(&self) -> Option<&'static str> {
        self.description
    }

    /// Names of the `{param}` placeholders in the path, in order.
    pub fn path_params(&self) -> Vec<&'static str> {
        self.path
            .split('{')
            .skip(1)
            .filter_map(|rest| rest.split_once('}').map(|(name, _)| name))
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Substitutes every placeholder with its value from `params`,
    /// percent-encoded as a single path segment.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingPathParam`] if a placeholder has no
    /// value, and [`ConfigError::InvalidPathParam`] if the value is empty,
    /// `.` or `..`.
    pub fn render_path(&self, params: &[(&str, &str)]) -> Result<String, ConfigError> {
        let mut path = self.path.to_string();
        for name in self.path_params() {
            let value = params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
                .ok_or_else(|| ConfigError::MissingPathParam {
                    name: name.to_string(),
                    path: self.path.to_string(),
                })?;
            if matches!(value, "" | "." | "..") {
                return Err(ConfigError::InvalidPathParam {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
            let encoded = utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string();
            path = path.replace(&format!("{{{name}}}"), &encoded);
        }
        Ok(path)
    }

    /// Resolves the rendered path against `base_url`.
    ///
    /// The path is joined relative to the base so that an API root such as
    /// `https://host:8443/nifi-api` keeps its `/nifi-api` prefix.
    pub fn full_url(&self, base_url: &Url, params: &[(&str, &str)]) -> Result<Url, ConfigError> {
        let path = self.render_path(params)?;
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Ok(base.join(path.trim_start_matches('/'))?)
    }
}

/// Builder for [`Endpoint`].
///
/// `id`, `method` and `path` start as [`Missing`] and change type when set,
/// so `build` only exists once all three are present.
#[derive(Debug)]
pub struct EndpointBuilder<I, M, P, F: ResponseFormat> {
    id: I,
    method: M,
    path: P,
    description: Option<&'static str>,
    _format: PhantomData<F>,
}

impl<M, P, F: ResponseFormat> EndpointBuilder<Missing, M, P, F> {
    pub fn id(self, id: &'static str) -> EndpointBuilder<&'static str, M, P, F> {
        EndpointBuilder {
            id,
            method: self.method,
            path: self.path,
            description: self.description,
            _format: PhantomData,
        }
    }
}

impl<I, P, F: ResponseFormat> EndpointBuilder<I, Missing, P, F> {
    pub fn method(self, method: HttpMethod) -> EndpointBuilder<I, HttpMethod, P, F> {
        EndpointBuilder {
            id: self.id,
            method,
            path: self.path,
            description: self.description,
            _format: PhantomData,
        }
    }
}

impl<I, M, F: ResponseFormat> EndpointBuilder<I, M, Missing, F> {
    /// Sets the path template. Placeholders are written `{name}`.
    pub fn path(self, path: &'static str) -> EndpointBuilder<I, M, &'static str, F> {
        EndpointBuilder {
            id: self.id,
            method: self.method,
            path,
            description: self.description,
            _format: PhantomData,
        }
    }
}

impl<I, M, P, F: ResponseFormat> EndpointBuilder<I, M, P, F> {
    pub fn description(self, description: &'static str) -> Self {
        Self {
            description: Some(description),
            ..self
        }
    }
}

impl<F: ResponseFormat> EndpointBuilder<&'static str, HttpMethod, &'static str, F> {
    pub fn build(self) -> Endpoint<F> {
        Endpoint {
            id: self.id,
            method: self.method,
            path: self.path,
            description: self.description,
            _format: PhantomData,
        }
    }
}

/// A request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Sent as `application/json`.
    Json(Value),
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
}

/// The per-call values of a request.
#[derive(Debug, Clone, Default)]
pub struct RequestArgs<'a> {
    params: Vec<(&'a str, &'a str)>,
    query: Vec<(&'a str, String)>,
    body: RequestBody,
}

impl<'a> RequestArgs<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies a value for the `{name}` path placeholder.
    pub fn param(mut self, name: &'a str, value: &'a str) -> Self {
        self.params.push((name, value));
        self
    }

    /// Appends a query pair.
    pub fn query(mut self, name: &'a str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Sends `record`'s wire mapping as the JSON body.
    pub fn record<R: Record>(mut self, record: &R) -> Self {
        self.body = RequestBody::Json(Value::Object(record.to_mapping()));
        self
    }

    /// Sends url-encoded form fields.
    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        self.body = RequestBody::Form(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    pub fn params(&self) -> &[(&'a str, &'a str)] {
        &self.params
    }

    pub fn query_pairs(&self) -> &[(&'a str, String)] {
        &self.query
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }
}
