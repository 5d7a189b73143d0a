// End-to-end tests for the parselab binary against a loopback HTTP stub.

use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::tempdir;

fn parselab() -> Command {
    Command::cargo_bin("parselab").expect("binary under test")
}

// Serves the same canned response to every connection. Connection: close
// keeps the client from reusing sockets between requests.
fn spawn_stub(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");

    thread::spawn(move || loop {
        match listener.accept() {
            Ok((mut stream, _)) => {
                read_http_request(&mut stream);
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
            Err(_) => break,
        }
    });

    format!("http://{}", addr)
}

fn read_http_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = match stream.read(&mut chunk) {
            Ok(n) => n,
            Err(_) => return,
        };
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..header_end]);
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                return;
            }
        }
    }
}

#[test]
fn help_lists_all_subcommands() {
    parselab().arg("--help").assert().success().stdout(
        contains("test")
            .and(contains("validate"))
            .and(contains("list"))
            .and(contains("show")),
    );
}

#[test]
fn requires_a_pattern_before_calling_the_api() {
    parselab()
        .args(["test", "--sample", "hello"])
        .assert()
        .failure()
        .stderr(contains("Regex pattern is required"));
}

#[test]
fn requires_a_sample_before_calling_the_api() {
    parselab()
        .args(["test", "--pattern", "(?<all>.*)"])
        .assert()
        .failure()
        .stderr(contains("Test string is required"));
}

#[test]
fn rejects_patterns_that_do_not_compile() {
    parselab()
        .args(["test", "--pattern", "/(unclosed/", "--sample", "hello"])
        .assert()
        .failure()
        .stderr(contains("Invalid regex pattern"));
}

#[test]
fn lists_catalog_categories_and_entries() {
    parselab().arg("list").assert().success().stdout(
        contains("web-logs")
            .and(contains("apache-common"))
            .and(contains("database-logs"))
            .and(contains("patterns in")),
    );
}

#[test]
fn filters_the_listing_by_category() {
    parselab()
        .args(["list", "--category", "database-logs"])
        .assert()
        .success()
        .stdout(
            contains("mysql-error")
                .and(contains("Database Logs"))
                .and(contains("web-logs").not()),
        );
}

#[test]
fn list_fails_for_unknown_categories() {
    parselab()
        .args(["list", "--category", "no-such-category"])
        .assert()
        .failure()
        .stderr(contains("Unknown category id"));
}

#[test]
fn shows_a_catalog_entry_in_full() {
    parselab()
        .args(["show", "apache-common"])
        .assert()
        .success()
        .stdout(
            contains("Apache Common Log")
                .and(contains("%d/%b/%Y:%H:%M:%S %z"))
                .and(contains("(?<host>")),
        );
}

#[test]
fn show_fails_for_unknown_ids() {
    parselab()
        .args(["show", "no-such-entry"])
        .assert()
        .failure()
        .stderr(contains("Unknown example id"));
}

#[test]
fn runs_catalog_example_against_the_api() {
    let url = spawn_stub(
        "200 OK",
        r#"{"result":{"errors":[],"parsed":{"host":"127.0.0.1","user":"frank"},"parsed_time":"2000/10/10 20:55:36 +0000"}}"#,
    );

    parselab()
        .args(["--api-url", &url, "test", "--example", "apache-combined"])
        .assert()
        .success()
        .stdout(
            contains("Parsed timestamp: 2000/10/10 20:55:36 +0000")
                .and(contains("Extracted fields (2):"))
                .and(contains("host"))
                .and(contains("frank")),
        );
}

#[test]
fn surfaces_api_errors_with_status_and_detail() {
    let url = spawn_stub("400 Bad Request", r#"{"message":"bad pattern"}"#);

    parselab()
        .args(["--api-url", &url, "test", "--example", "syslog"])
        .assert()
        .failure()
        .stderr(contains("API Error (400): bad pattern"));
}

#[test]
fn reports_unreachable_api_as_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let url = format!("http://{}", listener.local_addr().expect("addr"));
    drop(listener);

    parselab()
        .args(["--api-url", &url, "test", "--example", "syslog"])
        .assert()
        .failure()
        .stderr(contains("Network error: Unable to reach the parser API"));
}

#[test]
fn validate_writes_a_json_report() {
    let url = spawn_stub(
        "200 OK",
        r#"{"result":{"errors":[],"parsed":{"message":"x"},"parsed_time":null}}"#,
    );
    let dir = tempdir().expect("temp dir");
    let report_path = dir.path().join("report.json");

    parselab()
        .args(["--api-url", &url, "validate", "--category", "database-logs", "--delay-ms", "0"])
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(
            contains("Validation summary")
                .and(contains("Success rate: 100.0%"))
                .and(contains("All patterns passed.")),
        );

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("report written"))
            .expect("report is JSON");
    assert!(report["summary"]["total"].as_u64().expect("total") > 0);
    assert_eq!(report["summary"]["total"], report["summary"]["successful"]);
    assert_eq!(report["summary"]["successRate"], "100.0");
    assert_eq!(
        report["failedPatterns"].as_array().expect("array").len(),
        0
    );
}

#[test]
fn validate_fails_when_patterns_extract_nothing() {
    let url = spawn_stub(
        "200 OK",
        r#"{"result":{"errors":[],"parsed":{},"parsed_time":null}}"#,
    );
    let dir = tempdir().expect("temp dir");
    let report_path = dir.path().join("report.json");

    parselab()
        .args(["--api-url", &url, "validate", "--category", "message-queues", "--delay-ms", "0"])
        .arg("--report")
        .arg(&report_path)
        .assert()
        .failure()
        .stdout(
            contains("No fields extracted")
                .and(contains("Failed patterns:"))
                .and(contains("Suggested fix:")),
        )
        .stderr(contains("patterns failed validation"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("report written"))
            .expect("report is JSON");
    assert!(!report["failedPatterns"].as_array().expect("array").is_empty());
}
