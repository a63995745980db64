//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// One request received by a recording backend.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// e.g. "GET /users HTTP/1.1"
    pub request_line: String,
    /// Lowercased header names with trimmed values.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Start a simple mock backend that returns a fixed 200 response.
#[allow(dead_code)]
pub async fn start_mock_backend(addr: SocketAddr, response: &'static str) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut drain = [0u8; 1024];
                        let _ = socket.read(&mut drain).await;
                        let response_str = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            response.len(),
                            response
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Start a backend that records every request it receives and answers with
/// the given status and body.
#[allow(dead_code)]
pub async fn start_recording_backend(
    addr: SocketAddr,
    status: u16,
    response: &'static str,
) -> Arc<Mutex<Vec<CapturedRequest>>> {
    let listener = TcpListener::bind(addr).await.unwrap();
    let captured: Arc<Mutex<Vec<CapturedRequest>>> = Arc::new(Mutex::new(Vec::new()));
    let store = captured.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let store = store.clone();
                    tokio::spawn(async move {
                        let mut buf = Vec::new();
                        let mut chunk = [0u8; 1024];

                        // Read until the end of the request head.
                        let head_end = loop {
                            match socket.read(&mut chunk).await {
                                Ok(0) => return,
                                Ok(n) => {
                                    buf.extend_from_slice(&chunk[..n]);
                                    if let Some(pos) = find_head_end(&buf) {
                                        break pos;
                                    }
                                }
                                Err(_) => return,
                            }
                        };

                        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
                        let mut lines = head.split("\r\n");
                        let request_line = lines.next().unwrap_or_default().to_string();
                        let headers: Vec<(String, String)> = lines
                            .filter_map(|line| line.split_once(':'))
                            .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
                            .collect();

                        let content_length = headers
                            .iter()
                            .find(|(k, _)| k == "content-length")
                            .and_then(|(_, v)| v.parse::<usize>().ok())
                            .unwrap_or(0);

                        let mut body = buf[head_end + 4..].to_vec();
                        while body.len() < content_length {
                            match socket.read(&mut chunk).await {
                                Ok(0) => break,
                                Ok(n) => body.extend_from_slice(&chunk[..n]),
                                Err(_) => break,
                            }
                        }

                        store.lock().unwrap().push(CapturedRequest {
                            request_line,
                            headers,
                            body: String::from_utf8_lossy(&body).to_string(),
                        });

                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            response.len(),
                            response
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    captured
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
