//! HTTP methods used by the NiFi and Registry REST APIs.

use strum::{Display, EnumIter, EnumString};

/// The HTTP methods the bindings issue.
///
/// NiFi uses `PUT` for state changes (run status, scheduling) and guards
/// them with a component revision instead of relying on idempotency.
///
/// ## Examples
///
/// ```rust
/// use nifi_api::HttpMethod;
///
/// let parsed: HttpMethod = "PUT".parse().unwrap();
/// assert_eq!(parsed, HttpMethod::Put);
/// assert!(parsed.allows_body());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method may carry a body.
    pub fn allows_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        method.to_reqwest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_wire_names() {
        let names: Vec<String> = HttpMethod::iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["GET", "POST", "PUT", "DELETE"]);
        assert!("PATCH".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_allows_body() {
        assert!(!HttpMethod::Get.allows_body());
        assert!(HttpMethod::Post.allows_body());
        assert!(HttpMethod::Put.allows_body());
        assert!(!HttpMethod::Delete.allows_body());
    }

    #[test]
    fn test_to_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
        assert_eq!(HttpMethod::Delete.to_reqwest(), reqwest::Method::DELETE);
    }
}
