//! Local TMDB stand-in that answers one GET and reports what was asked.

use std::collections::HashMap;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// The GET request the client sent.
#[derive(Debug)]
pub struct CapturedGet {
    pub method: String,
    pub path: String,
    /// Raw query pairs, as sent on the wire.
    pub params: HashMap<String, String>,
}

impl CapturedGet {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Serve one canned JSON response on a random local port.
pub async fn serve_once(status: u16, reason: &str, body: &str) -> (String, JoinHandle<CapturedGet>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json;charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");
        let mut received = Vec::new();
        let mut chunk = [0u8; 2048];
        // GETs carry no body, the blank line ends the request.
        while !received.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            received.extend_from_slice(&chunk[..n]);
        }
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = socket.shutdown().await;
        parse_request_line(&String::from_utf8_lossy(&received))
    });

    (format!("http://{addr}"), handle)
}

fn parse_request_line(raw: &str) -> CapturedGet {
    let line = raw.lines().next().unwrap_or_default();
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default();
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let params = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k.to_string(), v.to_string())
        })
        .collect();
    CapturedGet {
        method,
        path: path.to_string(),
        params,
    }
}
