//! Shared fixtures: a recording transport double and a local echo server.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, RawQuery};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::Redirect;
use axum::routing::{any, get};
use axum::{Json, Router};
use requests_client::{PreparedRequest, Transport, TransportError, TransportResponse};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Records every prepared request and answers with a canned reply.
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<PreparedRequest>>>,
    reply: Result<TransportResponse, TransportError>,
}

impl RecordingTransport {
    pub fn ok(status: u16, body: &str) -> Self {
        Self {
            sent: Arc::default(),
            reply: Ok(TransportResponse {
                status,
                body: body.to_owned(),
            }),
        }
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            sent: Arc::default(),
            reply: Err(error),
        }
    }

    pub fn sent(&self) -> Vec<PreparedRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> PreparedRequest {
        self.sent().pop().expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn send(&self, request: &PreparedRequest) -> Result<TransportResponse, TransportError> {
        self.sent.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

/// Start the echo server on an ephemeral port and return its base URL.
pub fn spawn_server() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    listener.set_nonblocking(true).expect("nonblocking listener");
    let addr = listener.local_addr().expect("listener address");

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            axum::serve(listener, router()).await.expect("serve");
        });
    });

    format!("http://{addr}")
}

/// An address nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}/echo")
}

/// A forward proxy that only speaks `CONNECT` and tunnels every request to
/// one upstream address, recording the requested targets.
pub struct ConnectProxy {
    pub url: String,
    targets: Arc<Mutex<Vec<String>>>,
}

impl ConnectProxy {
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

/// Start a tunnelling proxy in front of `upstream` (an `http://host:port` base URL).
pub fn spawn_connect_proxy(upstream: &str) -> ConnectProxy {
    let upstream = upstream.trim_start_matches("http://").to_owned();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind proxy listener");
    listener.set_nonblocking(true).expect("nonblocking listener");
    let addr = listener.local_addr().expect("proxy address");
    let targets = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&targets);

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("proxy runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            while let Ok((inbound, _)) = listener.accept().await {
                tokio::spawn(tunnel(inbound, upstream.clone(), Arc::clone(&recorded)));
            }
        });
    });

    ConnectProxy {
        url: format!("http://{addr}"),
        targets,
    }
}

async fn tunnel(mut inbound: TcpStream, upstream: String, targets: Arc<Mutex<Vec<String>>>) {
    // Byte at a time so nothing past the request head is consumed.
    let mut head = Vec::new();
    let mut byte = [0_u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        match inbound.read(&mut byte).await {
            Ok(1) => head.push(byte[0]),
            _ => return,
        }
    }

    let head = String::from_utf8_lossy(&head).into_owned();
    let Some(target) = head
        .strip_prefix("CONNECT ")
        .and_then(|rest| rest.split_whitespace().next())
    else {
        let _ = inbound
            .write_all(b"HTTP/1.1 405 Method Not Allowed\r\ncontent-length: 0\r\n\r\n")
            .await;
        return;
    };
    targets.lock().unwrap().push(target.to_owned());

    let Ok(mut outbound) = TcpStream::connect(&upstream).await else {
        let _ = inbound.write_all(b"HTTP/1.1 502 Bad Gateway\r\n\r\n").await;
        return;
    };
    if inbound
        .write_all(b"HTTP/1.1 200 Connection established\r\n\r\n")
        .await
        .is_err()
    {
        return;
    }
    let _ = tokio::io::copy_bidirectional(&mut inbound, &mut outbound).await;
}

fn router() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/status/:code", any(status))
        .route("/redirect", get(|| async { Redirect::temporary("/echo?redirected=1") }))
        .route("/slow", get(slow))
}

async fn echo(method: Method, RawQuery(query): RawQuery, headers: HeaderMap, body: String) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned()
    };
    Json(json!({
        "method": method.as_str(),
        "query": query.unwrap_or_default(),
        "body": body,
        "content_type": header("content-type"),
        "authorization": header("authorization"),
        "user_agent": header("user-agent"),
        "x_test": header("x-test"),
        "x_raw": header("x-raw"),
    }))
}

async fn status(Path(code): Path<u16>) -> (StatusCode, String) {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, format!("status {code}"))
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "late"
}

/// Parse an echo response body.
pub fn echoed(output: Option<&str>) -> Value {
    serde_json::from_str(output.expect("response body")).expect("echo body is JSON")
}
