//! Error returned by every binding call.

use super::{AuthError, ClientError, ConfigError, ValidationError};
use thiserror::Error;

/// Every failure a binding call can report.
///
/// ```rust,ignore
/// use nifi_api::{ApiError, NifiApi};
///
/// async fn stop(api: &NifiApi, id: &str, status: &ProcessorRunStatusEntity) {
///     match api.update_run_status(id, status).await {
///         Ok(entity) => println!("now at revision {:?}", entity.revision()),
///         Err(err) if err.is_revision_conflict() => println!("stale revision, reload {id}"),
///         Err(ApiError::Validation(err)) => eprintln!("unexpected payload: {err}"),
///         Err(err) => eprintln!("{err}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failures and unmapped statuses.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Record constraint violations and response decoding failures.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 401 and 403 answers, or missing credentials.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Client or endpoint configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// See [`ClientError::is_revision_conflict`].
    pub fn is_revision_conflict(&self) -> bool {
        matches!(self, ApiError::Client(err) if err.is_revision_conflict())
    }
}
