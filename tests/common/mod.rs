// Minimal HTTP/1.1 server standing in for the interpreter service

#![allow(dead_code)]

use brewview::client::RunClient;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

pub struct StubServer {
    pub url: String,
    /// JSON bodies of the requests received, in arrival order
    pub requests: mpsc::UnboundedReceiver<serde_json::Value>,
}

/// How the stub answers one request
pub struct Reply {
    pub delay: Duration,
    pub status: &'static str,
    pub body: String,
}

/// Serve every request with the same status line and body
pub async fn stub_server(status: &'static str, body: &'static str) -> StubServer {
    serve(move |_| Reply {
        delay: Duration::ZERO,
        status,
        body: body.to_string(),
    })
    .await
}

/// Answer each request with its own stdin as stdout
///
/// Shorter inputs are answered later, so a burst of runs with growing stdin
/// finishes in reverse order.
pub async fn echo_server() -> StubServer {
    serve(|request| {
        let stdin = request["stdin"].as_str().unwrap_or_default().to_string();
        let delay = match stdin.as_str() {
            "a1234" => Duration::from_millis(400),
            "aa1234" => Duration::from_millis(200),
            _ => Duration::ZERO,
        };
        Reply {
            delay,
            status: "200 OK",
            body: serde_json::json!({ "stdout": stdin }).to_string(),
        }
    })
    .await
}

async fn serve<F>(respond: F) -> StubServer
where
    F: Fn(&serde_json::Value) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Stub server has no address");
    let (tx, rx) = mpsc::unbounded_channel();
    let respond = Arc::new(respond);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let tx = tx.clone();
            let respond = Arc::clone(&respond);
            tokio::spawn(async move {
                let request_body = read_request_body(&mut socket).await;
                let json: serde_json::Value =
                    serde_json::from_slice(&request_body).unwrap_or_default();
                let reply = respond(&json);
                let _ = tx.send(json);

                tokio::time::sleep(reply.delay).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    reply.status,
                    reply.body.len(),
                    reply.body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    StubServer {
        url: format!("http://{}/api/run", addr),
        requests: rx,
    }
}

/// URL of a loopback port nothing is listening on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind placeholder listener");
    let addr = listener.local_addr().expect("Placeholder listener has no address");
    drop(listener);
    format!("http://{}/api/run", addr)
}

/// Client that ignores proxy settings from the environment
pub fn direct_client(url: &str) -> RunClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    RunClient::with_http_client(url, http).expect("Invalid stub URL")
}

async fn read_request_body(socket: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        if let Some(header_end) = find_header_end(&buf) {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            let body_start = header_end + 4;

            while buf.len() < body_start + content_length {
                let n = socket.read(&mut chunk).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            return buf[body_start..].to_vec();
        }

        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return Vec::new();
        }
        buf.extend_from_slice(&chunk[..n]);
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}
