use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_help_lists_environment() {
    cargo_bin_cmd!("wait-ready")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("NIFI_API_ENDPOINT"))
        .stdout(predicate::str::contains("WAIT_TIMEOUT"));
}

#[test]
fn test_missing_configuration_exits_two() {
    cargo_bin_cmd!("wait-ready")
        .env_remove("NIFI_API_ENDPOINT")
        .env_remove("REGISTRY_API_ENDPOINT")
        .env("RUST_LOG", "info")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("NIFI_API_ENDPOINT"));
}

#[test]
fn test_unreachable_services_exit_one() {
    cargo_bin_cmd!("wait-ready")
        .env("NIFI_API_ENDPOINT", "http://127.0.0.1:1/nifi-api")
        .env("REGISTRY_API_ENDPOINT", "http://127.0.0.1:1/nifi-registry-api")
        .env("WAIT_TIMEOUT", "2")
        .env_remove("TLS_CA_CERT_PATH")
        .env_remove("REQUESTS_CA_BUNDLE")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("NiFi: NOT READY"))
        .stdout(predicate::str::contains("NiFi Registry: NOT READY"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ready_services_exit_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        cargo_bin_cmd!("wait-ready")
            .env("NIFI_API_ENDPOINT", format!("{uri}/nifi-api"))
            .env("REGISTRY_API_ENDPOINT", format!("{uri}/nifi-registry-api"))
            .env("WAIT_TIMEOUT", "5")
            .env_remove("TLS_CA_CERT_PATH")
            .env_remove("REQUESTS_CA_BUNDLE")
            .output()
    })
    .await
    .unwrap()
    .unwrap();

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("NiFi: READY"))
        .stdout(predicate::str::contains("NiFi Registry: READY"));
}
