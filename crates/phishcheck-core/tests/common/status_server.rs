//! Minimal HTTP/1.1 server for probe tests.
//!
//! Routes by path:
//! - `/ok` → 200
//! - `/ok%20page` → 200
//! - `/redirect` → 301 to `/ok`
//! - `/redirect-missing` → 302 to `/missing`
//! - `/missing` → 404
//! - `/error` → 500
//! - `/slow` → waits 3 s, then 200
//! - anything else → 200

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Starts the server in a background thread and returns its base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream, port));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// A URL on a port nobody listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, port: u16) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let base = format!("http://127.0.0.1:{}", port);
    let (status, location) = match path.as_str() {
        "/ok" | "/ok%20page" => ("200 OK", None),
        "/redirect" => ("301 Moved Permanently", Some(format!("{base}/ok"))),
        "/redirect-missing" => ("302 Found", Some(format!("{base}/missing"))),
        "/missing" => ("404 Not Found", None),
        "/error" => ("500 Internal Server Error", None),
        "/slow" => {
            thread::sleep(Duration::from_secs(3));
            ("200 OK", None)
        }
        _ => ("200 OK", None),
    };

    let location = location
        .map(|l| format!("Location: {l}\r\n"))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: 0\r\n{location}Connection: close\r\n\r\n"
    );
    let _ = stream.write_all(response.as_bytes());
}
