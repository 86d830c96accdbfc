//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A response shaped like the puzzle service's printer output
pub const SERVICE_RESPONSE: &str = "
--- Puzzle ---

AB + C = DE
 x   -   /
 F + G = H
 =   =   =
FJ + K = FG

--- Solution ---

12 + 3 = 15
 x   -   /
 4 + 1 = 5
 =   =   =
48 + 2 = 50

Letter -> Digit mapping: {'A': 1, 'B': 2, 'C': 3, 'D': 5}
";

/// Create a project directory, optionally with a calcrostic.toml
pub fn create_test_project(config: Option<&str>) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let project_root = temp_dir.path().to_path_buf();

    if let Some(contents) = config {
        fs::write(project_root.join("calcrostic.toml"), contents).expect("Failed to write config");
    }

    (temp_dir, project_root)
}

/// Serve a single canned HTTP response on a local port.
///
/// Returns the base URL and a handle resolving to the raw request head.
pub async fn spawn_stub_service(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read stub address");

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Failed to accept connection");

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.expect("Failed to read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        socket
            .write_all(response.as_bytes())
            .await
            .expect("Failed to write response");
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).to_string()
    });

    (format!("http://{}", addr), handle)
}

/// A base URL on which nothing is listening
pub async fn closed_service_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read address");
    drop(listener);
    format!("http://{}", addr)
}
