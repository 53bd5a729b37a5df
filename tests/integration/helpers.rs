//! Shared fixtures and a one-shot HTTP server for integration tests

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

/// Directory holding the HTML fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Serve a single HTTP response on a local port and return its URL.
///
/// The server thread answers the first connection and then exits.
pub fn serve_once(status: &str, body: &str) -> String {
    serve_bytes(status, body.as_bytes())
}

/// Like [`serve_once`], for bodies that need not be valid UTF-8.
pub fn serve_bytes(status: &str, body: &[u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Test server has no address");
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };

        // Read up to the end of the request headers
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let _ = stream.write_all(&response);
        let _ = stream.flush();
    });

    format!("http://{}/document/pub", addr)
}

/// Serve a fixture file with `200 OK`.
pub fn serve_fixture(name: &str) -> String {
    serve_once("200 OK", &load_fixture(name))
}

/// URL of a local port nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe socket");
    let addr = listener.local_addr().expect("Probe socket has no address");
    drop(listener);
    format!("http://{}/", addr)
}
