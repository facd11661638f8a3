//! Readiness probe for a NiFi and NiFi Registry pair.
//!
//! Both services are polled on their UI root and their "about" API resource
//! until one of the two answers with an accepted status or a shared time
//! budget runs out. See [`ProbeConfig`] for the environment variables read.

pub mod config;
pub mod error;
pub mod probe;

pub use config::{ClientIdentity, ProbeConfig};
pub use error::ConfigError;
pub use probe::{
    Attempt, Prober, Ready, Service, ServiceReport, Target, build_client, wait_until_ready,
};
