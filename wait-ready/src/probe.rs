//! Polling of the UI and API endpoints of each service.

use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::{Certificate, Client, Identity, StatusCode};
use tokio::time::{Instant, sleep};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::ProbeConfig;
use crate::error::ConfigError;

/// Upper bound for a single request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
/// Pause between poll rounds.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
/// Lower bound for a request issued after the budget is spent, so every
/// service is tried at least once.
const MIN_REQUEST_TIMEOUT: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Nifi,
    Registry,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Service::Nifi => "NiFi",
            Service::Registry => "NiFi Registry",
        }
    }

    fn ui_path(self) -> &'static str {
        match self {
            Service::Nifi => "/nifi/",
            Service::Registry => "/nifi-registry/",
        }
    }

    fn about_path(self) -> &'static str {
        match self {
            Service::Nifi => "flow/about",
            Service::Registry => "about",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two URLs probed for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub service: Service,
    /// UI root on the origin of the API endpoint.
    pub ui: Url,
    /// The "about" resource under the API endpoint.
    pub api: Url,
}

impl Target {
    pub fn new(service: Service, endpoint: &Url) -> Self {
        let mut ui = endpoint.clone();
        ui.set_path(service.ui_path());
        ui.set_query(None);
        ui.set_fragment(None);

        let mut api = endpoint.clone();
        let path = format!(
            "{}/{}",
            endpoint.path().trim_end_matches('/'),
            service.about_path()
        );
        api.set_path(&path);
        api.set_query(None);
        api.set_fragment(None);

        Self { service, ui, api }
    }
}

/// Why an attempt counted as ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ready {
    Status(StatusCode),
    /// The TLS handshake was refused for lack of a client certificate, so
    /// the server is up.
    ClientCertificateRequired,
}

/// Outcome of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    Ready(Ready),
    NotReady { kind: &'static str, message: String },
}

impl Attempt {
    pub fn is_ready(&self) -> bool {
        matches!(self, Attempt::Ready(_))
    }
}

/// Final state of one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReport {
    pub service: Service,
    pub ready: bool,
}

impl fmt::Display for ServiceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.ready { "READY" } else { "NOT READY" };
        write!(f, "{}: {state}", self.service)
    }
}

/// Statuses that show the service is serving requests.
pub fn is_accepted(status: StatusCode, accept_auth: bool) -> bool {
    status.is_success()
        || status.is_redirection()
        || (accept_auth && matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN))
}

/// Whether any error in the cause chain reports that the server demanded a
/// client certificate.
pub fn requires_client_certificate(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        let message = err.to_string().to_ascii_lowercase();
        if message.contains("certificaterequired") || message.contains("certificate required") {
            return true;
        }
        current = err.source();
    }
    false
}

/// Builds the HTTP client: no redirects, optional roots, optional client
/// identity, optional verification bypass.
pub fn build_client(config: &ProbeConfig) -> Result<Client, ConfigError> {
    let mut builder = Client::builder().redirect(Policy::none());

    if let Some(path) = &config.ca_bundle {
        let pem = read(path)?;
        let certs = Certificate::from_pem_bundle(&pem)
            .map_err(|_| ConfigError::InvalidCertificate { path: path.clone() })?;
        if certs.is_empty() {
            return Err(ConfigError::InvalidCertificate { path: path.clone() });
        }
        debug!(path = %path.display(), count = certs.len(), "trusting CA bundle");
        for cert in certs {
            builder = builder.add_root_certificate(cert);
        }
    }

    if let Some(identity) = &config.identity {
        let mut pem = read(&identity.cert)?;
        pem.push(b'\n');
        pem.extend(read(&identity.key)?);
        let identity = Identity::from_pem(&pem).map_err(ConfigError::InvalidIdentity)?;
        builder = builder.identity(identity);
    }

    if config.skip_verify {
        debug!("TLS certificate verification disabled");
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build().map_err(ConfigError::Client)
}

fn read(path: &Path) -> Result<Vec<u8>, ConfigError> {
    fs::read(path).map_err(|source| ConfigError::TlsMaterial {
        path: path.to_path_buf(),
        source,
    })
}

/// Polls service endpoints against a single deadline.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    accept_auth: bool,
    deadline: Instant,
}

impl Prober {
    /// Starts the budget now.
    pub fn new(client: Client, accept_auth: bool, budget: Duration) -> Self {
        Self {
            client,
            accept_auth,
            deadline: Instant::now() + budget,
        }
    }

    fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Issues one GET against `url`.
    pub async fn attempt(&self, url: &Url) -> Attempt {
        let timeout = self.remaining().clamp(MIN_REQUEST_TIMEOUT, REQUEST_TIMEOUT);
        match self.client.get(url.clone()).timeout(timeout).send().await {
            Ok(response) if is_accepted(response.status(), self.accept_auth) => {
                Attempt::Ready(Ready::Status(response.status()))
            }
            Ok(response) => Attempt::NotReady {
                kind: "status",
                message: response.status().to_string(),
            },
            Err(err) if requires_client_certificate(&err) => {
                Attempt::Ready(Ready::ClientCertificateRequired)
            }
            Err(err) => Attempt::NotReady {
                kind: error_kind(&err),
                message: err.to_string(),
            },
        }
    }

    /// Polls the UI and then the API of `target` until either is ready or
    /// the deadline passes. At least one round is always attempted.
    #[instrument(skip(self, target), fields(service = %target.service))]
    pub async fn wait_for(&self, target: &Target) -> bool {
        loop {
            for url in [&target.ui, &target.api] {
                match self.attempt(url).await {
                    Attempt::Ready(reason) => {
                        info!(url = %url, ?reason, "service ready");
                        return true;
                    }
                    Attempt::NotReady { kind, message } => {
                        warn!(url = %url, kind, message = %message, "attempt failed");
                    }
                }
            }

            let remaining = self.remaining();
            if remaining.is_zero() {
                info!("time budget exhausted");
                return false;
            }
            sleep(remaining.min(POLL_INTERVAL)).await;
        }
    }
}

fn error_kind(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else if err.is_request() {
        "request"
    } else {
        "other"
    }
}

/// Probes NiFi and then the Registry within `config.timeout`.
pub async fn wait_until_ready(config: &ProbeConfig) -> Result<Vec<ServiceReport>, ConfigError> {
    let prober = Prober::new(build_client(config)?, config.accept_auth, config.timeout);
    let targets = [
        Target::new(Service::Nifi, &config.nifi_endpoint),
        Target::new(Service::Registry, &config.registry_endpoint),
    ];

    let mut reports = Vec::with_capacity(targets.len());
    for target in &targets {
        let ready = prober.wait_for(target).await;
        reports.push(ServiceReport {
            service: target.service,
            ready,
        });
    }
    Ok(reports)
}
