//! How response bodies become records, text or plain serde values.

use std::future::Future;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ValidationError;
use crate::record::Record;

/// Strategy for parsing a response body.
pub trait ResponseFormat: Send + Sync {
    /// The output type after parsing.
    type Output: Send + Sync;

    /// Parse a response body into the output type.
    fn parse(
        body: bytes::Bytes,
    ) -> impl Future<Output = Result<Self::Output, ValidationError>> + Send;

    /// The media type sent in the `Accept` header.
    fn content_type() -> &'static str;
}

/// Plain serde deserialization of a JSON body, without schema checks.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned + Send + Sync> ResponseFormat for JsonFormat<T> {
    type Output = T;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        if body.is_empty() {
            return Err(ValidationError::EmptyBody);
        }
        serde_json::from_slice(&body).map_err(ValidationError::JsonParse)
    }

    fn content_type() -> &'static str {
        "application/json"
    }
}

/// A single validated record.
#[derive(Debug, Clone, Copy)]
pub struct RecordFormat<R>(PhantomData<R>);

impl<R: Record + Send + Sync> ResponseFormat for RecordFormat<R> {
    type Output = R;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        let value = JsonFormat::<Value>::parse(body).await?;
        R::from_value(value)
    }

    fn content_type() -> &'static str {
        "application/json"
    }
}

/// A JSON array of validated records.
#[derive(Debug, Clone, Copy)]
pub struct RecordListFormat<R>(PhantomData<R>);

impl<R: Record + Send + Sync> ResponseFormat for RecordListFormat<R> {
    type Output = Vec<R>;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        let items = JsonFormat::<Vec<Value>>::parse(body).await?;
        items.into_iter().map(R::from_value).collect()
    }

    fn content_type() -> &'static str {
        "application/json"
    }
}

/// A UTF-8 text body, such as an issued JWT.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormat;

impl ResponseFormat for PlainTextFormat {
    type Output = String;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        String::from_utf8(body.to_vec()).map_err(|e| ValidationError::ContentTypeMismatch {
            expected: "valid UTF-8 text".to_string(),
            actual: format!("invalid UTF-8: {e}"),
        })
    }

    fn content_type() -> &'static str {
        "text/plain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::registry::Bucket;

    #[tokio::test]
    async fn test_json_format_parse() {
        let body = bytes::Bytes::from(r#"{"registryAboutVersion": "2.1.0"}"#);
        let value = JsonFormat::<Value>::parse(body).await.unwrap();
        assert_eq!(value["registryAboutVersion"], "2.1.0");
    }

    #[tokio::test]
    async fn test_json_format_empty_body() {
        let result = JsonFormat::<Value>::parse(bytes::Bytes::new()).await;
        assert!(matches!(result, Err(ValidationError::EmptyBody)));
    }

    #[tokio::test]
    async fn test_record_format_validates() {
        let body = bytes::Bytes::from(r#"{"identifier": "b-1", "name": "flows"}"#);
        let bucket = RecordFormat::<Bucket>::parse(body).await.unwrap();
        assert_eq!(bucket.name(), "flows");

        let body = bytes::Bytes::from(r#"{"identifier": "b-1", "name": ""}"#);
        let result = RecordFormat::<Bucket>::parse(body).await;
        assert!(matches!(result, Err(ValidationError::TooShort { field: "name", .. })));
    }

    #[tokio::test]
    async fn test_record_list_format() {
        let body = bytes::Bytes::from(r#"[{"name": "a"}, {"name": "b"}]"#);
        let buckets = RecordListFormat::<Bucket>::parse(body).await.unwrap();
        let names: Vec<&str> = buckets.iter().map(Bucket::name).collect();
        assert_eq!(names, ["a", "b"]);

        let body = bytes::Bytes::from(r#"{"name": "a"}"#);
        let result = RecordListFormat::<Bucket>::parse(body).await;
        assert!(matches!(result, Err(ValidationError::JsonParse(_))));
    }

    #[tokio::test]
    async fn test_plain_text_format() {
        let token = PlainTextFormat::parse(bytes::Bytes::from("eyJhbGciOi")).await.unwrap();
        assert_eq!(token, "eyJhbGciOi");

        let result = PlainTextFormat::parse(bytes::Bytes::from(vec![0xff, 0xfe])).await;
        assert!(matches!(result, Err(ValidationError::ContentTypeMismatch { .. })));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(JsonFormat::<()>::content_type(), "application/json");
        assert_eq!(RecordFormat::<Bucket>::content_type(), "application/json");
        assert_eq!(PlainTextFormat::content_type(), "text/plain");
    }
}
