use crate::error::ClientError;
use crate::types::{TestOutcome, TestRequest};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct ParserApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct TestPayload<'a> {
    regex: &'a str,
    #[serde(rename = "testString")]
    test_string: &'a str,
    #[serde(rename = "timeFormat", skip_serializing_if = "Option::is_none")]
    time_format: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    result: ResultBody,
}

#[derive(Debug, Default, Deserialize)]
struct ResultBody {
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    parsed: IndexMap<String, String>,
    #[serde(default)]
    parsed_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ParserApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(classify)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn submit(&self, request: &TestRequest) -> Result<TestOutcome, ClientError> {
        let payload = TestPayload {
            regex: &request.pattern,
            test_string: &request.sample,
            // Omitted entirely when blank; the remote treats an empty
            // string as a real format, not as "no format".
            time_format: request
                .time_format
                .as_deref()
                .filter(|format| !format.trim().is_empty()),
        };

        let response = self
            .http
            .post(format!("{}/parser", self.base_url))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        let envelope: ResponseEnvelope = response.json().await.map_err(|err| {
            debug!("parser API returned a 2xx body that did not decode: {}", err);
            ClientError::Unexpected
        })?;

        Ok(TestOutcome {
            field_errors: envelope.result.errors,
            extracted_fields: envelope.result.parsed,
            parsed_timestamp: envelope.result.parsed_time,
        })
    }
}

// Blank message/error fields fall through to the next candidate, so a body
// like {"message":""} still ends up with the generic detail.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| {
            body.message
                .filter(|message| !message.is_empty())
                .or(body.error.filter(|error| !error.is_empty()))
        })
        .unwrap_or_else(|| String::from("Server error occurred"))
}

// Timeouts must outrank connection failures: a reqwest timeout also
// satisfies is_request(), so it is checked first.
fn classify(err: reqwest::Error) -> ClientError {
    if err.is_timeout() || err.is_builder() {
        ClientError::Request(err.to_string())
    } else if err.is_connect() || err.is_request() || err.is_body() || err.is_redirect() {
        ClientError::Network
    } else {
        ClientError::Unexpected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::mpsc;
    use std::thread;

    fn request(time_format: Option<&str>) -> TestRequest {
        TestRequest {
            pattern: "/^(?<all>.*)$/".to_string(),
            time_format: time_format.map(str::to_string),
            sample: "hello world".to_string(),
        }
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    // One-shot stub: serves a single canned response and hands back the raw
    // request it saw. Connection: close keeps reqwest from pooling.
    fn spawn_stub(response: String) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub addr");
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let raw = read_http_request(&mut stream);
                let _ = tx.send(raw);
                let _ = stream.write_all(response.as_bytes());
            }
        });

        (format!("http://{}", addr), rx)
    }

    fn spawn_hanging_stub() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub addr");

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let _ = read_http_request(&mut stream);
                thread::sleep(Duration::from_secs(5));
            }
        });

        format!("http://{}", addr)
    }

    fn read_http_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap_or(0);
            if n == 0 {
                break;
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
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn client(url: &str) -> ParserApiClient {
        ParserApiClient::new(url, Duration::from_secs(5)).expect("build client")
    }

    fn body_json(raw: &str) -> serde_json::Value {
        let body = raw.split_once("\r\n\r\n").map(|(_, body)| body).unwrap_or("");
        serde_json::from_str(body).expect("request body is JSON")
    }

    #[tokio::test]
    async fn posts_json_to_the_parser_path() {
        let (url, rx) = spawn_stub(http_response("200 OK", r#"{"result":{}}"#));

        client(&url).submit(&request(None)).await.expect("submit");

        let raw = rx.recv().expect("captured request");
        let head = raw.to_ascii_lowercase();
        assert!(raw.starts_with("POST /parser HTTP/1.1"), "request line: {}", raw);
        assert!(head.contains("content-type: application/json"));

        let body = body_json(&raw);
        assert_eq!(body["regex"], "/^(?<all>.*)$/");
        assert_eq!(body["testString"], "hello world");
    }

    #[tokio::test]
    async fn omits_time_format_when_absent() {
        let (url, rx) = spawn_stub(http_response("200 OK", r#"{"result":{}}"#));

        client(&url).submit(&request(None)).await.expect("submit");

        let body = body_json(&rx.recv().expect("captured request"));
        assert!(body.get("timeFormat").is_none());
    }

    #[tokio::test]
    async fn omits_time_format_when_blank() {
        let (url, rx) = spawn_stub(http_response("200 OK", r#"{"result":{}}"#));

        client(&url).submit(&request(Some("   "))).await.expect("submit");

        let body = body_json(&rx.recv().expect("captured request"));
        assert!(body.get("timeFormat").is_none());
    }

    #[tokio::test]
    async fn sends_time_format_untrimmed() {
        let (url, rx) = spawn_stub(http_response("200 OK", r#"{"result":{}}"#));

        client(&url)
            .submit(&request(Some(" %d/%b/%Y:%H:%M:%S %z ")))
            .await
            .expect("submit");

        let body = body_json(&rx.recv().expect("captured request"));
        assert_eq!(body["timeFormat"], " %d/%b/%Y:%H:%M:%S %z ");
    }

    #[tokio::test]
    async fn keeps_field_order_from_the_response() {
        let body = r#"{"result":{"errors":[],"parsed":{"host":"127.0.0.1","user":"frank"},"parsed_time":"2000/10/10 20:55:36 +0000"}}"#;
        let (url, _rx) = spawn_stub(http_response("200 OK", body));

        let outcome = client(&url).submit(&request(None)).await.expect("submit");

        let fields: Vec<(&str, &str)> = outcome
            .extracted_fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        assert_eq!(fields, vec![("host", "127.0.0.1"), ("user", "frank")]);
        assert_eq!(
            outcome.parsed_timestamp.as_deref(),
            Some("2000/10/10 20:55:36 +0000")
        );
        assert!(outcome.field_errors.is_empty());
    }

    #[tokio::test]
    async fn treats_parser_warnings_as_success() {
        let body = r#"{"result":{"errors":["x"],"parsed":{},"parsed_time":null}}"#;
        let (url, _rx) = spawn_stub(http_response("200 OK", body));

        let outcome = client(&url).submit(&request(None)).await.expect("submit");

        assert_eq!(outcome.field_errors, vec!["x".to_string()]);
        assert!(outcome.extracted_fields.is_empty());
        assert_eq!(outcome.parsed_timestamp, None);
    }

    #[tokio::test]
    async fn defaults_missing_result_fields() {
        let (url, _rx) = spawn_stub(http_response("200 OK", r#"{"result":{}}"#));

        let outcome = client(&url).submit(&request(None)).await.expect("submit");

        assert_eq!(outcome, TestOutcome::default());
    }

    #[tokio::test]
    async fn uses_message_detail_for_http_errors() {
        let (url, _rx) = spawn_stub(http_response("400 Bad Request", r#"{"message":"bad pattern"}"#));

        let err = client(&url).submit(&request(None)).await.unwrap_err();

        assert!(matches!(err, ClientError::Api { status: 400, .. }));
        assert_eq!(err.to_string(), "API Error (400): bad pattern");
    }

    #[tokio::test]
    async fn falls_back_to_generic_detail() {
        let (url, _rx) = spawn_stub(http_response("500 Internal Server Error", "{}"));

        let err = client(&url).submit(&request(None)).await.unwrap_err();

        assert_eq!(err.to_string(), "API Error (500): Server error occurred");
    }

    #[tokio::test]
    async fn classifies_unreachable_server_as_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let url = format!("http://{}", listener.local_addr().expect("addr"));
        drop(listener);

        let err = client(&url).submit(&request(None)).await.unwrap_err();

        assert!(matches!(err, ClientError::Network));
        assert_eq!(err.to_string(), "Network error: Unable to reach the parser API");
    }

    #[tokio::test]
    async fn classifies_timeout_as_request_error() {
        let url = spawn_hanging_stub();
        let client = ParserApiClient::new(&url, Duration::from_millis(200)).expect("build client");

        let err = client.submit(&request(None)).await.unwrap_err();

        assert!(matches!(err, ClientError::Request(_)));
        assert!(err.to_string().starts_with("Request error: "));
    }

    #[tokio::test]
    async fn rejects_malformed_success_body() {
        let (url, _rx) = spawn_stub(http_response("200 OK", "not json at all"));

        let err = client(&url).submit(&request(None)).await.unwrap_err();

        assert!(matches!(err, ClientError::Unexpected));
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred while testing the parser"
        );
    }

    #[test]
    fn error_detail_prefers_message_then_error_field() {
        assert_eq!(error_detail(r#"{"message":"bad pattern"}"#), "bad pattern");
        assert_eq!(
            error_detail(r#"{"error":"Internal server error"}"#),
            "Internal server error"
        );
        assert_eq!(
            error_detail(r#"{"message":"bad pattern","error":"ignored"}"#),
            "bad pattern"
        );
    }

    #[test]
    fn error_detail_skips_blank_fields_and_junk() {
        assert_eq!(error_detail(r#"{"message":"","error":"fallback"}"#), "fallback");
        assert_eq!(error_detail(r#"{"message":""}"#), "Server error occurred");
        assert_eq!(error_detail("{}"), "Server error occurred");
        assert_eq!(error_detail("<html>502</html>"), "Server error occurred");
    }
}
