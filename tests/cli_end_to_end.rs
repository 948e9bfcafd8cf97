#![deny(clippy::all, clippy::pedantic)]

use assert_cmd::Command;
use httpmock::MockServer;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_empty};

fn kconf(server: &MockServer) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kconf"));
    cmd.env_remove("KCONF_LOG")
        .arg(format!("--kong-address={}", server.base_url()))
        .arg("--port=0");
    cmd
}

#[test]
fn status_works_end_to_end() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/status")
            .header_exists("user-agent");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"database":{"reachable":true}}"#);
    });

    kconf(&server)
        .arg("status")
        .assert()
        .success()
        .stdout("200 OK\n");
    mock.assert();
}

#[test]
fn add_consumer_prints_id_only() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/consumers")
            .json_body(serde_json::json!({"username": "bob-the-builder"}));
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"id":"8a388226-80e8-4027-a486-25e4f7db5d21","custom_id":null,"tags":null,"username":"bob-the-builder"}"#);
    });

    kconf(&server)
        .args(["add", "consumer", "--user-name=bob-the-builder"])
        .assert()
        .success()
        .stdout("8a388226-80e8-4027-a486-25e4f7db5d21\n");
    mock.assert();
}

#[test]
fn verbose_after_global_position_prefixes_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("DELETE").path("/services/s1");
        then.status(204);
    });

    kconf(&server)
        .arg("--verbose")
        .args(["delete", "service", "--id=s1"])
        .assert()
        .success()
        .stdout("http response status code: 204 No Content\n");
}

#[test]
fn not_found_exits_non_zero() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/consumers/1234");
        then.status(404);
    });

    kconf(&server)
        .args(["query", "consumer", "--id=1234"])
        .assert()
        .failure()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("[error] consumer not found"));
}

#[test]
fn unknown_command_fails_without_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });

    kconf(&server)
        .arg("restart")
        .assert()
        .failure()
        .stderr(contains("invalid command: restart"));
    mock.assert_calls(0);
}

#[test]
fn unreachable_gateway_reports_transport_error() {
    Command::new(assert_cmd::cargo::cargo_bin!("kconf"))
        .args(["--kong-address=127.0.0.1", "--port=1", "status"])
        .assert()
        .failure()
        .stderr(contains("[error]").and(contains("127.0.0.1")));
}
