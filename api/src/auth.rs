//! Credentials attached to outgoing requests.

/// How a client authenticates against NiFi or the Registry.
///
/// NiFi issues JWTs from `POST /access/token`; the Registry issues them from
/// `POST /access/token/login` in exchange for HTTP basic credentials. Every
/// other secured call then sends the JWT as a bearer token.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub enum ApiAuth {
    /// Send no `Authorization` header.
    #[default]
    None,
    /// `Authorization: Bearer <token>`.
    BearerToken(String),
    /// `Authorization: Basic <base64(user:password)>`.
    Basic { username: String, password: String },
}

impl ApiAuth {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::BearerToken(token.into())
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Applies the credential to a request.
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::None => request,
            Self::BearerToken(token) => request.bearer_auth(token),
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
        }
    }

    /// Returns `true` if no credential is configured.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(ApiAuth::bearer("t"), ApiAuth::BearerToken("t".to_string()));
        assert!(matches!(
            ApiAuth::basic("admin", "secret"),
            ApiAuth::Basic { ref username, .. } if username == "admin"
        ));
        assert!(ApiAuth::default().is_none());
    }

    #[test]
    fn test_apply_sets_header() {
        let client = reqwest::Client::new();
        let request = ApiAuth::bearer("abc")
            .apply(client.get("http://localhost/"))
            .build()
            .unwrap();
        assert_eq!(request.headers()["authorization"], "Bearer abc");

        let request = ApiAuth::basic("u", "p")
            .apply(client.get("http://localhost/"))
            .build()
            .unwrap();
        assert_eq!(request.headers()["authorization"], "Basic dTpw");
    }
}
