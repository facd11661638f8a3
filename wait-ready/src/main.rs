use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wait_ready::{ProbeConfig, wait_until_ready};

/// Wait until NiFi and NiFi Registry answer HTTP requests
#[derive(Parser)]
#[command(name = "wait-ready", version, about, after_help = AFTER_HELP)]
struct Cli {}

const AFTER_HELP: &str = "\
ENVIRONMENT:
  NIFI_API_ENDPOINT         NiFi API base URL (required)
  REGISTRY_API_ENDPOINT     NiFi Registry API base URL (required)
  TLS_CA_CERT_PATH          PEM bundle of trusted roots
  REQUESTS_CA_BUNDLE        Used when TLS_CA_CERT_PATH is unset
  MTLS_CLIENT_CERT          PEM client certificate
  MTLS_CLIENT_KEY           PEM client key (unencrypted)
  WAIT_SKIP_VERIFY          Skip certificate verification (default: true without a CA)
  WAIT_TIMEOUT              Time budget in seconds (default: 60)
  WAIT_ACCEPT_AUTH          Count 401/403 as ready (default: true)

EXIT STATUS:
  0  both services ready
  1  a service is not ready, or TLS material could not be loaded
  2  required configuration is missing or invalid
";

/// Compact stderr output filtered by `RUST_LOG`, defaulting to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    Cli::parse();
    init_tracing();

    let config = match ProbeConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            return ExitCode::from(err.exit_code());
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "failed to start runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(wait_until_ready(&config)) {
        Ok(reports) => {
            for report in &reports {
                println!("{report}");
            }
            if reports.iter().all(|report| report.ready) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            error!(error = %err, "failed to prepare probe");
            ExitCode::from(err.exit_code())
        }
    }
}
