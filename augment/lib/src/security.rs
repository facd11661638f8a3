//! Security scheme injection for the NiFi and NiFi Registry documents.
//!
//! The upstream documents declare no security schemes, so generated clients
//! would never attach credentials. A [`SecurityProfile`] describes the
//! schemes to add, the requirement applied to every operation, and the one
//! login operation whose requirement is overridden.

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::document::ensure_object;

/// An HTTP authentication scheme as declared under
/// `components.securitySchemes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpScheme {
    /// `Authorization: Bearer <JWT>`
    Bearer,
    /// `Authorization: Basic <credentials>`
    Basic,
}

impl HttpScheme {
    /// The scheme object written into the document.
    pub fn to_value(self) -> Value {
        match self {
            HttpScheme::Bearer => json!({
                "type": "http",
                "scheme": "bearer",
                "bearerFormat": "JWT"
            }),
            HttpScheme::Basic => json!({
                "type": "http",
                "scheme": "basic"
            }),
        }
    }
}

/// The operation that issues tokens and therefore cannot itself require
/// the bearer scheme.
#[derive(Debug, Clone, Copy)]
pub struct LoginOperation {
    /// Logical path, without any deployment prefix.
    pub path: &'static str,
    /// Lower-case HTTP method key of the operation.
    pub method: &'static str,
    /// Prefix tried before the unprefixed path.
    pub prefix: &'static str,
    /// Scheme required by the operation; `None` clears its requirement.
    pub requirement: Option<&'static str>,
}

/// The complete set of security patches for one service.
#[derive(Debug, Clone, Copy)]
pub struct SecurityProfile {
    pub schemes: &'static [(&'static str, HttpScheme)],
    /// Scheme required by default on every operation.
    pub global: &'static str,
    pub login: LoginOperation,
}

/// NiFi: bearer tokens everywhere, anonymous `POST /access/token`.
pub const NIFI_SECURITY: SecurityProfile = SecurityProfile {
    schemes: &[("bearerAuth", HttpScheme::Bearer)],
    global: "bearerAuth",
    login: LoginOperation {
        path: "/access/token",
        method: "post",
        prefix: "/nifi-api",
        requirement: None,
    },
};

/// NiFi Registry: bearer tokens everywhere, basic credentials on
/// `POST /access/token/login`.
pub const REGISTRY_SECURITY: SecurityProfile = SecurityProfile {
    schemes: &[
        ("bearerAuth", HttpScheme::Bearer),
        ("basicAuth", HttpScheme::Basic),
    ],
    global: "bearerAuth",
    login: LoginOperation {
        path: "/access/token/login",
        method: "post",
        prefix: "/nifi-registry-api",
        requirement: Some("basicAuth"),
    },
};

/// Resolves a logical `path` against the keys of a `paths` table, trying
/// `prefix + path` first and then `path` itself.
pub fn resolve_path(paths: &Map<String, Value>, prefix: &str, path: &str) -> Option<String> {
    [format!("{prefix}{path}"), path.to_string()]
        .into_iter()
        .find(|candidate| paths.contains_key(candidate))
}

fn requirement(scheme: &str) -> Value {
    json!([{ scheme: [] }])
}

/// Applies `profile` to `doc`.
///
/// Returns the resolved path of the login operation when its requirement was
/// overridden, or `None` when the operation is absent. Applying a profile
/// twice yields the same document.
pub fn apply_security(doc: &mut Value, profile: &SecurityProfile) -> Option<String> {
    let Some(root) = doc.as_object_mut() else {
        debug!("document root is not an object; skipping security patch");
        return None;
    };

    let components = ensure_object(root, "components");
    let schemes = ensure_object(components, "securitySchemes");
    for (name, scheme) in profile.schemes {
        schemes.insert((*name).to_string(), scheme.to_value());
        debug!(scheme = *name, "security scheme declared");
    }

    root.insert("security".to_string(), requirement(profile.global));

    let login = &profile.login;
    let paths = ensure_object(root, "paths");
    let Some(resolved) = resolve_path(paths, login.prefix, login.path) else {
        debug!(path = login.path, "login path not present; skipping override");
        return None;
    };

    let operation = paths
        .get_mut(&resolved)
        .and_then(|item| item.get_mut(login.method))
        .and_then(Value::as_object_mut);
    let Some(operation) = operation else {
        debug!(path = %resolved, method = login.method, "login operation not present; skipping override");
        return None;
    };

    let security = match login.requirement {
        Some(scheme) => requirement(scheme),
        None => Value::Array(Vec::new()),
    };
    operation.insert("security".to_string(), security);
    debug!(path = %resolved, method = login.method, "login security overridden");
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn resolve_prefers_prefixed_path() {
        let Value::Object(paths) = json!({
            "/nifi-api/access/token": {},
            "/access/token": {}
        }) else {
            panic!("expected object");
        };
        assert_eq!(
            resolve_path(&paths, "/nifi-api", "/access/token").as_deref(),
            Some("/nifi-api/access/token")
        );
    }

    #[test]
    fn resolve_falls_back_to_unprefixed_path() {
        let Value::Object(paths) = json!({ "/access/token": {} }) else {
            panic!("expected object");
        };
        assert_eq!(
            resolve_path(&paths, "/nifi-api", "/access/token").as_deref(),
            Some("/access/token")
        );
        assert_eq!(resolve_path(&paths, "/nifi-api", "/access/logout"), None);
    }

    #[test]
    fn nifi_profile_clears_login_requirement() {
        let mut doc = json!({
            "openapi": "3.0.1",
            "paths": {
                "/nifi-api/access/token": { "post": { "operationId": "createAccessToken" } },
                "/nifi-api/flow/about": { "get": { "operationId": "getAboutInfo" } }
            }
        });

        let resolved = apply_security(&mut doc, &NIFI_SECURITY);
        assert_eq!(resolved.as_deref(), Some("/nifi-api/access/token"));

        assert_eq!(
            doc["components"]["securitySchemes"]["bearerAuth"],
            json!({ "type": "http", "scheme": "bearer", "bearerFormat": "JWT" })
        );
        assert_eq!(doc["security"], json!([{ "bearerAuth": [] }]));
        assert_eq!(
            doc["paths"]["/nifi-api/access/token"]["post"]["security"],
            json!([])
        );
        assert!(doc["paths"]["/nifi-api/flow/about"]["get"].get("security").is_none());
    }

    #[test]
    fn registry_profile_requires_basic_on_login() {
        let mut doc = json!({
            "swagger": "2.0",
            "components": { "schemas": { "Bucket": {} } },
            "paths": {
                "/access/token/login": { "post": {} }
            }
        });

        let resolved = apply_security(&mut doc, &REGISTRY_SECURITY);
        assert_eq!(resolved.as_deref(), Some("/access/token/login"));

        let schemes = &doc["components"]["securitySchemes"];
        assert_eq!(schemes["basicAuth"], json!({ "type": "http", "scheme": "basic" }));
        assert_eq!(schemes["bearerAuth"]["bearerFormat"], "JWT");
        assert!(doc["components"]["schemas"]["Bucket"].is_object());
        assert_eq!(
            doc["paths"]["/access/token/login"]["post"]["security"],
            json!([{ "basicAuth": [] }])
        );
    }

    #[test]
    #[traced_test]
    fn missing_login_operation_is_skipped() {
        let mut doc = json!({ "paths": { "/nifi-api/access/token": { "get": {} } } });

        assert_eq!(apply_security(&mut doc, &NIFI_SECURITY), None);
        assert_eq!(doc["security"], json!([{ "bearerAuth": [] }]));
        assert!(doc["paths"]["/nifi-api/access/token"]["get"].get("security").is_none());
        assert!(logs_contain("login operation not present"));
    }

    #[test]
    fn missing_structure_is_created() {
        let mut doc = json!({});
        assert_eq!(apply_security(&mut doc, &REGISTRY_SECURITY), None);
        assert!(doc["paths"].is_object());
        assert_eq!(
            doc["components"]["securitySchemes"]
                .as_object()
                .map(Map::len),
            Some(2)
        );
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let mut doc = json!({
            "paths": { "/nifi-api/access/token": { "post": {} } },
            "components": "not an object"
        });
        apply_security(&mut doc, &NIFI_SECURITY);
        let once = doc.clone();
        apply_security(&mut doc, &NIFI_SECURITY);
        assert_eq!(doc, once);
    }

    #[test]
    fn non_object_root_is_left_alone() {
        let mut doc = json!(["not", "a", "document"]);
        assert_eq!(apply_security(&mut doc, &NIFI_SECURITY), None);
        assert_eq!(doc, json!(["not", "a", "document"]));
    }
}
