//! Integration tests for the backend REST client.
//!
//! These tests run against a canned in-process HTTP responder instead of a
//! real backend service, so they exercise the full request path: URL
//! construction, query encoding, JSON decoding, and status-error mapping.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use unibox_rest::{BackendClient, Direction, Error, SendMessageRequest};

/// Serves exactly one canned HTTP response and hands back the raw request
/// bytes for assertions.
async fn spawn_responder(
    status: &str,
    content_type: &str,
    body: &str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len(),
    );

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
        request
    });

    (format!("http://{addr}"), handle)
}

/// Reads one HTTP request (headers plus any Content-Length body).
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = find_blank_line(&buf) {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn find_blank_line(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[tokio::test]
async fn messages_parses_previews() {
    let body = r#"[
        {"phoneNumber": "+15551234567", "snippet": "running late", "timestamp": "2026-08-01T14:02:00Z", "unread": true, "fromYou": false},
        {"phoneNumber": "+15559876543", "snippet": "sounds good", "unread": false, "fromYou": true}
    ]"#;
    let (base_url, server) = spawn_responder("200 OK", "application/json", body).await;

    let client = BackendClient::new(&base_url);
    let previews = client.messages().await.unwrap();

    assert_eq!(previews.len(), 2);
    assert_eq!(previews[0].phone_number, "+15551234567");
    assert!(previews[0].is_unresponded());
    assert!(previews[1].from_you);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /messages HTTP/1.1"));
}

#[tokio::test]
async fn conversation_percent_encodes_phone() {
    let body = r#"[
        {"text": "hey, where are you?", "time": "14:01", "direction": "incoming"},
        {"text": "on my way", "time": "14:02", "direction": "outgoing"}
    ]"#;
    let (base_url, server) = spawn_responder("200 OK", "application/json", body).await;

    let client = BackendClient::new(&base_url);
    let thread = client.conversation("+1 555 867-5309").await.unwrap();

    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0].direction, Direction::Incoming);
    assert_eq!(thread[1].direction, Direction::Outgoing);

    let request = server.await.unwrap();
    assert!(
        request.starts_with("GET /conversation?phone=%2B1+555+867-5309 HTTP/1.1"),
        "unexpected request line: {request}"
    );
}

#[tokio::test]
async fn non_success_status_carries_body_text() {
    let (base_url, server) =
        spawn_responder("500 Internal Server Error", "text/plain", "backend exploded").await;

    let client = BackendClient::new(&base_url);
    let result = client.messages().await;

    match result {
        Err(Error::Status { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "backend exploded");
        }
        other => panic!("expected status error, got {other:?}"),
    }

    server.await.unwrap();
}

#[tokio::test]
async fn send_message_posts_json_and_returns_raw_text() {
    let (base_url, server) =
        spawn_responder("200 OK", "text/plain", "Message queued for delivery").await;

    let client = BackendClient::new(&base_url);
    let status = client
        .send_message(&SendMessageRequest::new("+15551234567", "hello there"))
        .await
        .unwrap();

    assert_eq!(status, "Message queued for delivery");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /send-message HTTP/1.1"));
    assert!(request.contains(r#"{"phoneNumber":"+15551234567","text":"hello there"}"#));
}
