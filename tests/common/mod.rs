#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::{Request, State},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
    Router,
};
use flowchat::{
    app::app,
    config::Config,
    state::{AppState, State as FlowchatState},
};
use serde_json::Value;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

pub const LANGFLOW_ID: &str = "tenant-1";
pub const APP_TOKEN: &str = "secret-token";

/// What the fake flow API saw.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct Fake {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

pub struct Upstream {
    pub base_url: String,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

impl Upstream {
    pub fn requests(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }
}

fn header(headers: &HeaderMap, name: axum::http::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn record(State(fake): State<Fake>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    fake.recorded.lock().unwrap().push(Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        authorization: header(&parts.headers, AUTHORIZATION),
        content_type: header(&parts.headers, CONTENT_TYPE),
        body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
    });

    (fake.status, [(CONTENT_TYPE, fake.content_type)], fake.body).into_response()
}

/// Starts a fake flow API that answers every request with `status` and `body`.
pub async fn upstream(status: StatusCode, content_type: &'static str, body: &str) -> Upstream {
    let recorded = Arc::new(Mutex::new(vec![]));
    let fake = Fake {
        status,
        content_type,
        body: body.to_string(),
        recorded: recorded.clone(),
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new().fallback(record).with_state(fake);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Upstream {
        base_url: format!("http://{addr}"),
        recorded,
    }
}

pub async fn json_upstream(body: &str) -> Upstream {
    upstream(StatusCode::OK, "application/json", body).await
}

/// Reads one request off `socket`, headers and body.
async fn drain_request(socket: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if buf.len() >= end + 4 + length {
                return;
            }
        }
    }
}

/// Fake flow API that answers 500 and hangs up before the promised body is
/// complete.
pub async fn truncated_error_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        drain_request(&mut socket).await;
        socket
            .write_all(
                b"HTTP/1.1 500 Internal Server Error\r\ncontent-type: text/plain\r\ncontent-length: 100\r\n\r\nshort",
            )
            .await
            .unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}")
}

/// Base URL of a port nobody listens on.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn config(base_url: &str) -> Config {
    let base_url = base_url.to_string();
    Config::from_lookup(move |key| match key {
        "LANGFLOW_ID" => Some(LANGFLOW_ID.to_string()),
        "FLOW_ID" => Some("flow-unused".to_string()),
        "APP_TOKEN" => Some(APP_TOKEN.to_string()),
        "LANGFLOW_BASE_URL" => Some(base_url.clone()),
        _ => None,
    })
    .unwrap()
}

pub fn service(base_url: &str) -> Router {
    let state: AppState = Arc::new(FlowchatState::new(&config(base_url)).unwrap());
    app(state)
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

pub const HELLO: &str = r#"{"outputs":[{"outputs":[{"results":{"message":{"text":"hello"}}}]}]}"#;
