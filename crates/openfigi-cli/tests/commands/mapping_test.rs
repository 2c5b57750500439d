//! Tests for the `mapping` command.

use assert_cmd::Command;
use predicates::prelude::*;

fn openfigi() -> Command {
    let mut cmd = Command::cargo_bin("openfigi").unwrap();
    cmd.env_remove("OPENFIGI_API_KEY")
        .env_remove("OPENFIGI_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Test that the mapping command documents its argument.
#[test]
fn test_mapping_help() {
    openfigi()
        .arg("mapping")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticker to look up"));
}

/// Test that the ticker argument is required.
#[test]
fn test_mapping_requires_ticker() {
    openfigi().arg("mapping").assert().failure().code(2);
}

/// Test that results are printed as JSON on stdout.
#[test]
fn test_mapping_prints_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v3/mapping")
        .match_header("x-openfigi-apikey", "cli-key")
        .match_body(mockito::Matcher::JsonString(
            r#"[{"idType":"TICKER","idValue":"AAPL"}]"#.to_string(),
        ))
        .with_status(200)
        .with_body(r#"[{"data":[{"figi":"BBG000BLNNH6","ticker":"AAPL"}]}]"#)
        .create();

    openfigi()
        .arg("--base-url")
        .arg(server.url())
        .arg("--api-key")
        .arg("cli-key")
        .arg("mapping")
        .arg("AAPL")
        .assert()
        .success()
        .stdout("[{\"figi\":\"BBG000BLNNH6\",\"ticker\":\"AAPL\"}]\n");

    mock.assert();
}

/// Test that the API key can come from the environment.
#[test]
fn test_mapping_api_key_from_env() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v3/mapping")
        .match_header("x-openfigi-apikey", "env-key")
        .with_status(200)
        .with_body(r#"[{"data":[]}]"#)
        .create();

    openfigi()
        .env("OPENFIGI_API_KEY", "env-key")
        .env("OPENFIGI_BASE_URL", server.url())
        .arg("mapping")
        .arg("AAPL")
        .assert()
        .success()
        .stdout("[]\n");

    mock.assert();
}

/// Test that an API-level error exits non-zero with the message on stderr.
#[test]
fn test_mapping_api_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/v3/mapping")
        .with_status(200)
        .with_body(r#"[{"error":"Invalid idValue format"}]"#)
        .create();

    openfigi()
        .arg("--base-url")
        .arg(server.url())
        .arg("mapping")
        .arg("AAPL")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid idValue format"));
}

/// Test that a bad status is reported with its code and body.
#[test]
fn test_mapping_bad_status() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/v3/mapping")
        .with_status(500)
        .with_body("internal error")
        .create();

    openfigi()
        .arg("--base-url")
        .arg(server.url())
        .arg("mapping")
        .arg("AAPL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("500"))
        .stderr(predicate::str::contains("internal error"));
}

/// Test that an unreachable endpoint fails instead of hanging.
#[test]
fn test_mapping_unreachable_endpoint() {
    openfigi()
        .arg("--base-url")
        .arg("http://127.0.0.1:9") // Unlikely to be listening
        .arg("mapping")
        .arg("AAPL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));
}
