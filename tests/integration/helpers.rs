//! Shared test helpers for integration tests

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// A descriptor with every cell set to `ch`.
pub fn filled(ch: char) -> String {
    ch.to_string().repeat(256)
}

/// Listing body for `(file name, descriptor)` pairs, `|`-terminated.
pub fn listing_body(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(name, descriptor)| format!("{},{}|", name, descriptor))
        .collect()
}

/// Decode `%XX` escapes in a request target.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 3 <= bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Minimal HTTP server standing in for the sketch device.
///
/// Answers `getList.html` with the configured body and `delete.html` with
/// an empty 200 response, and records every request target it sees.
pub struct MockDevice {
    port: u16,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockDevice {
    /// Serve `listing` with HTTP 200.
    pub fn start(listing: &str) -> Self {
        Self::start_with_status(listing, 200)
    }

    /// Serve `listing`, answering every request with `status`.
    pub fn start_with_status(listing: &str, status: u16) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock device");
        let port = listener.local_addr().expect("local addr").port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let body = listing.to_string();
        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                handle_connection(stream, &body, status, &seen);
            }
        });

        Self { port, requests }
    }

    /// Base URL of the server.
    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Request targets received so far, e.g. `/getList.html`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }
}

fn handle_connection(stream: TcpStream, listing: &str, status: u16, seen: &Mutex<Vec<String>>) {
    let mut reader = BufReader::new(match stream.try_clone() {
        Ok(s) => s,
        Err(_) => return,
    });

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // Drain headers
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) if line == "\r\n" || line == "\n" => break,
            Ok(_) => {}
            Err(_) => return,
        }
    }

    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();
    seen.lock().expect("requests lock").push(target.clone());

    let body = if target.starts_with("/getList.html") && status == 200 {
        listing
    } else {
        ""
    };
    let status = if target.starts_with("/getList.html") || target.starts_with("/delete.html") {
        status
    } else {
        404
    };
    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let mut stream = stream;
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

#[test]
fn percent_decode_handles_escape_at_end() {
    assert_eq!(percent_decode("a%2C"), "a,");
    assert_eq!(percent_decode("my%20cat,a%26b,"), "my cat,a&b,");
    assert_eq!(percent_decode("50%"), "50%");
    assert_eq!(percent_decode("%2"), "%2");
}
