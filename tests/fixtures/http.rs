//! Minimal canned-reply HTTP server for exercising the backend adapter.
//!
//! Serves one reply per connection, in order, and records what it was sent.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// e.g. `GET /api/pickup/get-today-pickup?today=2026-10-19 HTTP/1.1`
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

pub struct CannedReply {
    pub status: u16,
    pub body: &'static str,
}

impl CannedReply {
    pub fn ok(body: &'static str) -> Self {
        Self { status: 200, body }
    }

    pub fn status(status: u16, body: &'static str) -> Self {
        Self { status, body }
    }
}

pub struct MockServer {
    pub base_url: String,
    requests: Receiver<RecordedRequest>,
    _handle: JoinHandle<()>,
}

impl MockServer {
    pub fn start(replies: Vec<CannedReply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let (sender, requests) = mpsc::channel();

        let handle = thread::spawn(move || {
            for reply in replies {
                let (stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let mut reader = BufReader::new(stream);
                let request = read_request(&mut reader);
                let _ = sender.send(request);

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    reply.status,
                    reason(reply.status),
                    reply.body.len(),
                    reply.body
                );
                let mut stream = reader.into_inner();
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self {
            base_url,
            requests,
            _handle: handle,
        }
    }

    /// Next request the server received, in arrival order.
    pub fn next_request(&self) -> RecordedRequest {
        self.requests
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("mock server saw no request")
    }
}

fn read_request<R: Read>(reader: &mut BufReader<R>) -> RecordedRequest {
    let mut request_line = String::new();
    let _ = reader.read_line(&mut request_line);

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_string();
            let value = value.trim().to_string();
            if key.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            }
            headers.push((key, value));
        }
    }

    let mut body = vec![0u8; content_length];
    let _ = reader.read_exact(&mut body);

    RecordedRequest {
        request_line: request_line.trim_end().to_string(),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
