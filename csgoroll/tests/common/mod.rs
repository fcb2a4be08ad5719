//! A minimal HTTP server standing in for the GraphQL endpoint.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error":"unavailable"}"#.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Header names are lowercased.
    pub headers: HashMap<String, String>,
    pub body: serde_json::Value,
}

/// Serves `responses` in order, one per connection, repeating the last one
/// once the list runs out.
pub struct MockGraphqlServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockGraphqlServer {
    pub async fn start(responses: Vec<MockResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        let handle = tokio::spawn(async move {
            let mut served = 0;
            while let Ok((stream, _)) = listener.accept().await {
                let response = responses
                    .get(served)
                    .or(responses.last())
                    .cloned()
                    .expect("at least one mock response");
                served += 1;

                Self::handle_connection(stream, &response, &recorded).await;
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/graphql", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    async fn handle_connection(
        mut stream: TcpStream,
        response: &MockResponse,
        recorded: &Mutex<Vec<RecordedRequest>>,
    ) -> Option<()> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let read = stream.read(&mut chunk).await.ok()?;
            if read == 0 {
                return None;
            }
            buffer.extend_from_slice(&chunk[..read]);
            if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
        let headers: HashMap<String, String> = head
            .lines()
            .skip(1)
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim().to_lowercase(), value.trim().to_string()))
            .collect();

        let content_length: usize = headers
            .get("content-length")
            .and_then(|len| len.parse().ok())
            .unwrap_or(0);

        while buffer.len() < header_end + content_length {
            let read = stream.read(&mut chunk).await.ok()?;
            if read == 0 {
                return None;
            }
            buffer.extend_from_slice(&chunk[..read]);
        }

        let body = serde_json::from_slice(&buffer[header_end..header_end + content_length])
            .unwrap_or(serde_json::Value::Null);
        recorded
            .lock()
            .unwrap()
            .push(RecordedRequest { headers, body });

        let reply = format!(
            "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response.status,
            response.body.len(),
            response.body
        );
        stream.write_all(reply.as_bytes()).await.ok()?;
        stream.shutdown().await.ok()
    }
}

impl Drop for MockGraphqlServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Address with nothing listening on it.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/graphql")
}

pub fn page(edges: serde_json::Value, page_info: serde_json::Value) -> String {
    serde_json::json!({
        "data": { "trades": { "edges": edges, "pageInfo": page_info } }
    })
    .to_string()
}

pub const NO_EDGES: &str = r#"{"data":{"trades":{"edges":null}}}"#;
