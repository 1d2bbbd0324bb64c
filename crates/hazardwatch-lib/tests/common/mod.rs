//! Minimal in-process upstream for feed tests.
//!
//! Serves one canned HTTP response per connection on an ephemeral port so
//! tests exercise the real client stack without touching the network.

#![allow(dead_code)]

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// What the mock upstream answers with.
#[derive(Debug, Clone)]
pub enum UpstreamResponse {
    /// 200 with a JSON body.
    Json(&'static str),
    /// An empty body with the given status code.
    Status(u16),
    /// 200 with a body that is not valid JSON.
    Garbage(&'static str),
    /// 200 with a JSON body, delivered only after a delay.
    SlowJson {
        body: &'static str,
        delay: Duration,
    },
}

/// Spawn the mock upstream; returns its URL and a channel yielding the
/// request target (path + query) of every request served.
pub async fn spawn_upstream(response: UpstreamResponse) -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("mock upstream addr");
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let response = response.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                handle(stream, response, tx).await;
            });
        }
    });

    (format!("http://{addr}/events"), rx)
}

/// An address nothing listens on, for connection-refused tests.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway addr");
    drop(listener);
    format!("http://{addr}/events")
}

async fn handle(
    mut stream: TcpStream,
    response: UpstreamResponse,
    tx: mpsc::UnboundedSender<String>,
) {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                request.extend_from_slice(&chunk[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => return,
        }
    }

    if let Some(target) = request_target(&request) {
        let _ = tx.send(target);
    }

    let (status_line, body) = match response {
        UpstreamResponse::Json(body) => ("HTTP/1.1 200 OK", body),
        UpstreamResponse::Garbage(body) => ("HTTP/1.1 200 OK", body),
        UpstreamResponse::Status(code) => {
            let line: &'static str = match code {
                404 => "HTTP/1.1 404 Not Found",
                500 => "HTTP/1.1 500 Internal Server Error",
                503 => "HTTP/1.1 503 Service Unavailable",
                _ => "HTTP/1.1 400 Bad Request",
            };
            (line, "")
        }
        UpstreamResponse::SlowJson { body, delay } => {
            tokio::time::sleep(delay).await;
            ("HTTP/1.1 200 OK", body)
        }
    };

    let payload = format!(
        "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(payload.as_bytes()).await;
    let _ = stream.shutdown().await;
}

fn request_target(request: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(request).ok()?;
    let line = text.lines().next()?;
    line.split_whitespace().nth(1).map(|t| t.to_string())
}
