//! Local X stand-in that accepts one POST and hands back what it received.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// The request the platform sent, split into its parts.
#[derive(Debug)]
pub struct CapturedPost {
    pub request_line: String,
    /// Header names lowercased, values untouched.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedPost {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

/// Answer the next request with a canned status and body.
pub async fn serve_once(status: u16, reason: &str, body: &str) -> (String, JoinHandle<CapturedPost>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");
        let mut received = Vec::new();
        let mut chunk = [0u8; 4096];
        let captured = loop {
            let n = socket.read(&mut chunk).await.expect("read request");
            received.extend_from_slice(&chunk[..n]);
            if let Some(captured) = split_request(&received) {
                break captured;
            }
            assert!(n != 0, "connection closed before the body arrived");
        };
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = socket.shutdown().await;
        captured
    });

    (format!("http://{addr}"), handle)
}

/// Parse a complete request, or `None` while the body is still arriving.
fn split_request(buf: &[u8]) -> Option<CapturedPost> {
    let head_end = buf.windows(4).position(|w| w == b"\r\n\r\n")?;
    let head = String::from_utf8_lossy(&buf[..head_end]);
    let mut lines = head.lines();
    let request_line = lines.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let body = buf.get(head_end + 4..head_end + 4 + content_length)?;

    Some(CapturedPost {
        request_line,
        headers,
        body: String::from_utf8_lossy(body).into_owned(),
    })
}
