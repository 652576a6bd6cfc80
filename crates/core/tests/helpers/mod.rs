//! One-shot HTTP stub for exercising the reqwest adapter without a network.
//!
//! The stub accepts a single connection, records the request line and answers
//! with a canned response.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

use comment_search_core::HttpCommentSource;
use reqwest::{Client, Url};

pub struct StubServer {
    pub endpoint: Url,
    handle: JoinHandle<String>,
}

impl StubServer {
    /// Serve one response with the given status line (e.g. `"200 OK"`) and body.
    pub fn respond(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub listener");
        let addr = listener.local_addr().expect("Stub listener has no address");
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("Stub accept failed");
            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).expect("Stub read failed");
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }
            stream.write_all(response.as_bytes()).expect("Stub write failed");
            String::from_utf8_lossy(&head).lines().next().unwrap_or_default().to_string()
        });

        let endpoint = Url::parse(&format!("http://{addr}")).expect("Stub URL is valid");
        Self { endpoint, handle }
    }

    /// Adapter pointed at this stub, bypassing any proxy from the environment.
    pub fn source(&self) -> HttpCommentSource {
        let client = Client::builder().no_proxy().build().expect("Failed to build client");
        HttpCommentSource::with_client(client, self.endpoint.clone())
    }

    /// Wait for the stub to finish and return the request line it received.
    pub fn request_line(self) -> String {
        self.handle.join().expect("Stub thread panicked")
    }
}

/// JSON array of `n` comments shaped like the public comments API.
pub fn comments_json(n: usize) -> String {
    let items: Vec<serde_json::Value> = (1..=n)
        .map(|i| {
            serde_json::json!({
                "postId": 1,
                "id": i,
                "name": format!("Test {i}"),
                "email": format!("test{i}@example.com"),
                "body": format!("This is test comment {i}"),
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}
