//! Executes endpoints against a NiFi or Registry base URL.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use tracing::{Span, debug, instrument};
use url::Url;

use crate::auth::ApiAuth;
use crate::endpoint::{Endpoint, RequestArgs, RequestBody};
use crate::error::{ApiError, AuthError, ClientError, ConfigError};
use crate::response::ResponseFormat;

/// Applied to every request unless the builder overrides it.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    auth: ApiAuth,
    root_certificates: Vec<reqwest::Certificate>,
    accept_invalid_certs: bool,
}

impl ApiClientBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            auth: ApiAuth::None,
            root_certificates: Vec::new(),
            accept_invalid_certs: false,
        }
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if the name or value is not a
    /// valid HTTP header.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ConfigError::invalid_header(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ConfigError::invalid_header(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    pub fn auth(mut self, auth: ApiAuth) -> Self {
        self.auth = auth;
        self
    }

    /// Trusts every certificate in a PEM bundle in addition to the
    /// platform roots.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidCertificate`] if the bundle cannot be
    /// parsed or holds no certificate.
    pub fn ca_certificate_pem(mut self, pem: &[u8]) -> Result<Self, ApiError> {
        let certs = reqwest::Certificate::from_pem_bundle(pem).map_err(|e| {
            ConfigError::InvalidCertificate {
                message: e.to_string(),
            }
        })?;
        if certs.is_empty() {
            return Err(ConfigError::InvalidCertificate {
                message: "no certificates found in PEM bundle".to_string(),
            }
            .into());
        }
        self.root_certificates.extend(certs);
        Ok(self)
    }

    /// Disables server certificate verification.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .danger_accept_invalid_certs(self.accept_invalid_certs);
        for cert in self.root_certificates {
            builder = builder.add_root_certificate(cert);
        }
        let client = builder.build().map_err(ClientError::Request)?;

        Ok(ApiClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
            auth: self.auth,
        })
    }
}

/// Async HTTP client bound to one service's API root.
///
/// ## Examples
///
/// ```rust,ignore
/// use nifi_api::{ApiAuth, ApiClient};
/// use url::Url;
///
/// let base_url = Url::parse("https://localhost:8443/nifi-api")?;
/// let client = ApiClient::builder(base_url)
///     .auth(ApiAuth::bearer(token))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    auth: ApiAuth,
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Client with a 30 s timeout, no default headers and no credentials.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn auth(&self) -> &ApiAuth {
        &self.auth
    }

    /// Returns a client sharing this one's connection pool but sending
    /// different credentials.
    pub fn with_auth(&self, auth: ApiAuth) -> Self {
        Self {
            auth,
            ..self.clone()
        }
    }

    /// Executes an endpoint and parses the response.
    ///
    /// ## Errors
    ///
    /// - [`ConfigError`] if a path parameter is missing, the URL is invalid
    ///   or a body is supplied for `GET` or `DELETE`
    /// - [`AuthError`] for 401 and 403 responses
    /// - [`ClientError`] for network failures, timeouts and other non-2xx
    ///   statuses
    /// - [`ValidationError`](crate::ValidationError) if the body does not
    ///   parse or breaks a record constraint
    #[instrument(
        name = "api_request",
        skip(self, endpoint, args),
        fields(
            api.endpoint = endpoint.id(),
            http.method = %endpoint.method(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute<F>(
        &self,
        endpoint: &Endpoint<F>,
        args: RequestArgs<'_>,
    ) -> Result<F::Output, ApiError>
    where
        F: ResponseFormat,
    {
        if !matches!(args.body(), RequestBody::Empty) && !endpoint.method().allows_body() {
            return Err(ConfigError::BodyNotAllowed {
                method: endpoint.method(),
                endpoint: endpoint.id(),
            }
            .into());
        }

        let mut url = endpoint.full_url(&self.base_url, args.params())?;
        if !args.query_pairs().is_empty() {
            url.query_pairs_mut()
                .extend_pairs(args.query_pairs().iter().map(|(k, v)| (*k, v.as_str())));
        }
        Span::current().record("http.url", url.as_str());

        let mut request = self
            .client
            .request(endpoint.method().to_reqwest(), url)
            .header(ACCEPT, F::content_type());
        request = self.auth.apply(request);
        request = match args.body() {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(value),
            RequestBody::Form(fields) => request.form(fields),
        };

        let response = request.send().await.map_err(|e| self.request_error(e))?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            debug!(status = status_code, %body, "request rejected");

            return Err(match status_code {
                401 => AuthError::AuthenticationFailed { message: body }.into(),
                403 => AuthError::InsufficientPermissions {
                    operation: endpoint.id().to_string(),
                }
                .into(),
                _ => ClientError::Status {
                    status: status_code,
                    body,
                }
                .into(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;
        let parsed = F::parse(body).await?;

        Ok(parsed)
    }

    fn request_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout {
                duration_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            ClientError::Request(error)
        }
    }
}
