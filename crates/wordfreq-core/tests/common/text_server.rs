//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every GET with a fixed status and body, and counts requests so
//! tests can check how often the source was fetched.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Handle to a running server.
pub struct TextServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl TextServer {
    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serves `body` with `200 OK`.
pub fn start(body: &str) -> TextServer {
    start_with_status(200, "OK", body)
}

/// Serves `body` with the given status line. The server runs until the process exits.
pub fn start_with_status(code: u16, reason: &'static str, body: &str) -> TextServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.as_bytes().to_vec());
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            server_hits.fetch_add(1, Ordering::SeqCst);
            thread::spawn(move || handle(stream, code, reason, &body));
        }
    });
    TextServer {
        url: format!("http://127.0.0.1:{}/book.txt", port),
        hits,
    }
}

fn handle(mut stream: TcpStream, code: u16, reason: &str, body: &[u8]) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        code,
        reason,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
