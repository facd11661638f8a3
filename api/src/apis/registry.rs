use tracing::{debug, instrument};

use super::non_empty_token;
use crate::auth::ApiAuth;
use crate::client::ApiClient;
use crate::endpoint::{Endpoint, RequestArgs};
use crate::error::ApiError;
use crate::method::HttpMethod;
use crate::models::registry::{
    Bucket, CurrentUser, RegistryAbout, VersionedFlow, VersionedFlowSnapshotMetadata,
};
use crate::response::{PlainTextFormat, RecordFormat, RecordListFormat};

fn about() -> Endpoint<RecordFormat<RegistryAbout>> {
    Endpoint::builder()
        .id("getVersion")
        .method(HttpMethod::Get)
        .path("/about")
        .build()
}

fn create_access_token_by_basic_auth() -> Endpoint<PlainTextFormat> {
    Endpoint::builder()
        .id("createAccessTokenUsingBasicAuthCredentials")
        .method(HttpMethod::Post)
        .path("/access/token/login")
        .description("Creates a token for accessing the REST API via HTTP basic credentials")
        .build()
}

fn get_access_status() -> Endpoint<RecordFormat<CurrentUser>> {
    Endpoint::builder()
        .id("getAccessStatus")
        .method(HttpMethod::Get)
        .path("/access")
        .build()
}

fn get_buckets() -> Endpoint<RecordListFormat<Bucket>> {
    Endpoint::builder()
        .id("getBuckets")
        .method(HttpMethod::Get)
        .path("/buckets")
        .build()
}

fn get_bucket() -> Endpoint<RecordFormat<Bucket>> {
    Endpoint::builder()
        .id("getBucket")
        .method(HttpMethod::Get)
        .path("/buckets/{bucketId}")
        .build()
}

fn create_bucket() -> Endpoint<RecordFormat<Bucket>> {
    Endpoint::builder()
        .id("createBucket")
        .method(HttpMethod::Post)
        .path("/buckets")
        .build()
}

fn delete_bucket() -> Endpoint<RecordFormat<Bucket>> {
    Endpoint::builder()
        .id("deleteBucket")
        .method(HttpMethod::Delete)
        .path("/buckets/{bucketId}")
        .build()
}

fn get_flows() -> Endpoint<RecordListFormat<VersionedFlow>> {
    Endpoint::builder()
        .id("getFlows")
        .method(HttpMethod::Get)
        .path("/buckets/{bucketId}/flows")
        .build()
}

fn get_flow_versions() -> Endpoint<RecordListFormat<VersionedFlowSnapshotMetadata>> {
    Endpoint::builder()
        .id("getFlowVersions")
        .method(HttpMethod::Get)
        .path("/buckets/{bucketId}/flows/{flowId}/versions")
        .build()
}

/// Bindings for the NiFi Registry REST API.
#[derive(Debug, Clone)]
pub struct RegistryApi {
    client: ApiClient,
}

impl RegistryApi {
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

    /// `GET /about`
    pub async fn about(&self) -> Result<RegistryAbout, ApiError> {
        self.client.execute(&about(), RequestArgs::new()).await
    }

    /// `POST /access/token/login` with HTTP basic credentials; returns the
    /// issued JWT.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let client = self.client.with_auth(ApiAuth::basic(username, password));
        let token = client
            .execute(&create_access_token_by_basic_auth(), RequestArgs::new())
            .await?;
        debug!("access token issued");
        non_empty_token(token)
    }

    /// `GET /access`
    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.client.execute(&get_access_status(), RequestArgs::new()).await
    }

    /// `GET /buckets`
    pub async fn list_buckets(&self) -> Result<Vec<Bucket>, ApiError> {
        self.client.execute(&get_buckets(), RequestArgs::new()).await
    }

    /// `GET /buckets/{bucketId}`
    pub async fn get_bucket(&self, bucket_id: &str) -> Result<Bucket, ApiError> {
        let args = RequestArgs::new().param("bucketId", bucket_id);
        self.client.execute(&get_bucket(), args).await
    }

    /// `POST /buckets`
    pub async fn create_bucket(&self, bucket: &Bucket) -> Result<Bucket, ApiError> {
        let args = RequestArgs::new().record(bucket);
        self.client.execute(&create_bucket(), args).await
    }

    /// `DELETE /buckets/{bucketId}?version=<revision>`
    pub async fn delete_bucket(&self, bucket_id: &str, version: i64) -> Result<Bucket, ApiError> {
        let args = RequestArgs::new()
            .param("bucketId", bucket_id)
            .query("version", version);
        self.client.execute(&delete_bucket(), args).await
    }

    /// `GET /buckets/{bucketId}/flows`
    pub async fn list_flows(&self, bucket_id: &str) -> Result<Vec<VersionedFlow>, ApiError> {
        let args = RequestArgs::new().param("bucketId", bucket_id);
        self.client.execute(&get_flows(), args).await
    }

    /// `GET /buckets/{bucketId}/flows/{flowId}/versions`
    pub async fn list_versions(
        &self,
        bucket_id: &str,
        flow_id: &str,
    ) -> Result<Vec<VersionedFlowSnapshotMetadata>, ApiError> {
        let args = RequestArgs::new()
            .param("bucketId", bucket_id)
            .param("flowId", flow_id);
        self.client.execute(&get_flow_versions(), args).await
    }
}
