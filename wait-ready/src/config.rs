//! Probe settings read from the environment.
//!
//! Values are obtained through a lookup closure so callers other than
//! `main` can supply them without touching the process environment.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client certificate and private key, both PEM files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub cert: PathBuf,
    pub key: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    pub nifi_endpoint: Url,
    pub registry_endpoint: Url,
    /// PEM bundle of trusted roots.
    pub ca_bundle: Option<PathBuf>,
    pub identity: Option<ClientIdentity>,
    pub skip_verify: bool,
    /// Budget shared by every probe.
    pub timeout: Duration,
    /// Treat 401 and 403 as ready.
    pub accept_auth: bool,
}

impl ProbeConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let nifi_endpoint = endpoint("NIFI_API_ENDPOINT", get("NIFI_API_ENDPOINT"))?;
        let registry_endpoint = endpoint("REGISTRY_API_ENDPOINT", get("REGISTRY_API_ENDPOINT"))?;

        let ca_bundle = get("TLS_CA_CERT_PATH")
            .or_else(|| get("REQUESTS_CA_BUNDLE"))
            .map(PathBuf::from);

        let identity = match (get("MTLS_CLIENT_CERT"), get("MTLS_CLIENT_KEY")) {
            (Some(cert), Some(key)) => Some(ClientIdentity {
                cert: PathBuf::from(cert),
                key: PathBuf::from(key),
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteIdentity),
        };
        if get("MTLS_CLIENT_KEY_PASSWORD").is_some() {
            warn!("MTLS_CLIENT_KEY_PASSWORD is set but encrypted client keys are not supported");
        }

        let skip_verify = match get("WAIT_SKIP_VERIFY") {
            Some(value) => flag("WAIT_SKIP_VERIFY", &value)?,
            None => ca_bundle.is_none(),
        };

        let timeout = match get("WAIT_TIMEOUT") {
            Some(value) => seconds("WAIT_TIMEOUT", &value)?,
            None => DEFAULT_TIMEOUT,
        };

        let accept_auth = match get("WAIT_ACCEPT_AUTH") {
            Some(value) => flag("WAIT_ACCEPT_AUTH", &value)?,
            None => true,
        };

        Ok(Self {
            nifi_endpoint,
            registry_endpoint,
            ca_bundle,
            identity,
            skip_verify,
            timeout,
            accept_auth,
        })
    }
}

fn endpoint(name: &'static str, value: Option<String>) -> Result<Url, ConfigError> {
    let value = value.ok_or(ConfigError::MissingVariable { name })?;
    match Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(url),
        _ => Err(ConfigError::InvalidEndpoint { name, value }),
    }
}

fn flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}

fn seconds(name: &'static str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tracing_test::traced_test;

    fn config(vars: &[(&str, &str)]) -> Result<ProbeConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProbeConfig::from_lookup(|name| vars.get(name).cloned())
    }

    const ENDPOINTS: [(&str, &str); 2] = [
        ("NIFI_API_ENDPOINT", "https://nifi:8443/nifi-api"),
        ("REGISTRY_API_ENDPOINT", "https://registry:18443/nifi-registry-api"),
    ];

    #[test]
    fn defaults() {
        let config = config(&ENDPOINTS).unwrap();
        assert_eq!(config.nifi_endpoint.as_str(), "https://nifi:8443/nifi-api");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.accept_auth);
        assert!(config.skip_verify);
        assert_eq!(config.ca_bundle, None);
        assert_eq!(config.identity, None);
    }

    #[test]
    fn missing_endpoint() {
        let err = config(&ENDPOINTS[..1]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingVariable { name: "REGISTRY_API_ENDPOINT" }
        ));
        assert_eq!(err.exit_code(), 2);

        let blank = config(&[ENDPOINTS[1], ("NIFI_API_ENDPOINT", "  ")]).unwrap_err();
        assert!(matches!(blank, ConfigError::MissingVariable { name: "NIFI_API_ENDPOINT" }));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = config(&[ENDPOINTS[1], ("NIFI_API_ENDPOINT", "nifi:8443")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { name: "NIFI_API_ENDPOINT", .. }));
    }

    #[test]
    fn ca_bundle_disables_skip_verify() {
        let mut vars = ENDPOINTS.to_vec();
        vars.push(("REQUESTS_CA_BUNDLE", "/etc/ssl/bundle.pem"));
        let config = config(&vars).unwrap();
        assert_eq!(config.ca_bundle, Some(PathBuf::from("/etc/ssl/bundle.pem")));
        assert!(!config.skip_verify);
    }

    #[test]
    fn tls_ca_cert_path_wins_over_requests_bundle() {
        let mut vars = ENDPOINTS.to_vec();
        vars.push(("REQUESTS_CA_BUNDLE", "/etc/ssl/bundle.pem"));
        vars.push(("TLS_CA_CERT_PATH", "/certs/ca.pem"));
        vars.push(("WAIT_SKIP_VERIFY", "true"));
        let config = config(&vars).unwrap();
        assert_eq!(config.ca_bundle, Some(PathBuf::from("/certs/ca.pem")));
        assert!(config.skip_verify);
    }

    #[test]
    fn explicit_flags_and_timeout() {
        let mut vars = ENDPOINTS.to_vec();
        vars.push(("WAIT_SKIP_VERIFY", "0"));
        vars.push(("WAIT_ACCEPT_AUTH", "No"));
        vars.push(("WAIT_TIMEOUT", "2.5"));
        let config = config(&vars).unwrap();
        assert!(!config.skip_verify);
        assert!(!config.accept_auth);
        assert_eq!(config.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn invalid_timeout() {
        for value in ["soon", "-1", "NaN"] {
            let mut vars = ENDPOINTS.to_vec();
            vars.push(("WAIT_TIMEOUT", value));
            assert!(matches!(
                config(&vars),
                Err(ConfigError::InvalidValue { name: "WAIT_TIMEOUT", .. })
            ));
        }
    }

    #[test]
    fn identity_requires_cert_and_key() {
        let mut vars = ENDPOINTS.to_vec();
        vars.push(("MTLS_CLIENT_CERT", "/certs/client.pem"));
        assert!(matches!(config(&vars), Err(ConfigError::IncompleteIdentity)));

        vars.push(("MTLS_CLIENT_KEY", "/certs/client.key"));
        let identity = config(&vars).unwrap().identity.unwrap();
        assert_eq!(identity.key, PathBuf::from("/certs/client.key"));
    }

    #[test]
    #[traced_test]
    fn key_password_only_warns() {
        let mut vars = ENDPOINTS.to_vec();
        vars.push(("MTLS_CLIENT_KEY_PASSWORD", "secret"));
        assert!(config(&vars).is_ok());
        assert!(logs_contain("encrypted client keys are not supported"));
    }
}
