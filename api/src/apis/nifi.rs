use tracing::{debug, instrument};

use super::non_empty_token;
use crate::auth::ApiAuth;
use crate::client::ApiClient;
use crate::endpoint::{Endpoint, RequestArgs};
use crate::error::{ApiError, ConfigError};
use crate::method::HttpMethod;
use crate::models::nifi::{
    AboutEntity, ProcessGroupEntity, ProcessorEntity, ProcessorRunStatusEntity,
    ScheduleComponentsEntity,
};
use crate::response::{PlainTextFormat, RecordFormat};

fn about() -> Endpoint<RecordFormat<AboutEntity>> {
    Endpoint::builder()
        .id("getAboutInfo")
        .method(HttpMethod::Get)
        .path("/flow/about")
        .description("Retrieves details about this NiFi instance")
        .build()
}

fn create_access_token() -> Endpoint<PlainTextFormat> {
    Endpoint::builder()
        .id("createAccessToken")
        .method(HttpMethod::Post)
        .path("/access/token")
        .description("Creates a token for accessing the REST API via username/password")
        .build()
}

fn get_processor() -> Endpoint<RecordFormat<ProcessorEntity>> {
    Endpoint::builder()
        .id("getProcessor")
        .method(HttpMethod::Get)
        .path("/processors/{id}")
        .build()
}

fn update_run_status() -> Endpoint<RecordFormat<ProcessorEntity>> {
    Endpoint::builder()
        .id("updateRunStatus")
        .method(HttpMethod::Put)
        .path("/processors/{id}/run-status")
        .build()
}

fn get_process_group() -> Endpoint<RecordFormat<ProcessGroupEntity>> {
    Endpoint::builder()
        .id("getProcessGroup")
        .method(HttpMethod::Get)
        .path("/process-groups/{id}")
        .build()
}

fn schedule_components() -> Endpoint<RecordFormat<ScheduleComponentsEntity>> {
    Endpoint::builder()
        .id("scheduleComponents")
        .method(HttpMethod::Put)
        .path("/flow/process-groups/{id}")
        .description("Schedule or unschedule components in the specified process group")
        .build()
}

/// Bindings for the NiFi REST API.
#[derive(Debug, Clone)]
pub struct NifiApi {
    client: ApiClient,
}

impl NifiApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns bindings that send `token` as a bearer credential.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self::new(self.client.with_auth(ApiAuth::bearer(token)))
    }

    /// `GET /flow/about`
    pub async fn about(&self) -> Result<AboutEntity, ApiError> {
        self.client.execute(&about(), RequestArgs::new()).await
    }

    /// `POST /access/token`: exchanges a username and password for a JWT.
    ///
    /// ## Errors
    ///
    /// Besides transport and auth errors, an empty token body is reported as
    /// [`ValidationError::EmptyBody`](crate::ValidationError::EmptyBody).
    #[instrument(skip(self, password))]
    pub async fn create_access_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let args = RequestArgs::new().form(&[("username", username), ("password", password)]);
        let token = self.client.execute(&create_access_token(), args).await?;
        debug!("access token issued");
        non_empty_token(token)
    }

    /// `GET /processors/{id}`
    pub async fn get_processor(&self, id: &str) -> Result<ProcessorEntity, ApiError> {
        let args = RequestArgs::new().param("id", id);
        self.client.execute(&get_processor(), args).await
    }

    /// `PUT /processors/{id}/run-status`
    ///
    /// The revision in `status` must match the processor's current revision
    /// or NiFi answers 409.
    pub async fn update_run_status(
        &self,
        id: &str,
        status: &ProcessorRunStatusEntity,
    ) -> Result<ProcessorEntity, ApiError> {
        let args = RequestArgs::new().param("id", id).record(status);
        self.client.execute(&update_run_status(), args).await
    }

    /// `GET /process-groups/{id}`
    pub async fn get_process_group(&self, id: &str) -> Result<ProcessGroupEntity, ApiError> {
        let args = RequestArgs::new().param("id", id);
        self.client.execute(&get_process_group(), args).await
    }

    /// `PUT /flow/process-groups/{id}`, addressed by the entity's own `id`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingPathParam`] if `request` has no id.
    pub async fn schedule_components(
        &self,
        request: &ScheduleComponentsEntity,
    ) -> Result<ScheduleComponentsEntity, ApiError> {
        let endpoint = schedule_components();
        let id = request.id().ok_or_else(|| ConfigError::MissingPathParam {
            name: "id".to_string(),
            path: endpoint.path().to_string(),
        })?;
        let args = RequestArgs::new().param("id", id).record(request);
        self.client.execute(&endpoint, args).await
    }
}
