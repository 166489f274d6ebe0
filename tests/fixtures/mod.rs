//! Shared fixtures for integration tests: an in-process server, a stub
//! execution service and small WebSocket client helpers.

#![allow(dead_code)]

use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::post};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

use code_collab_rs::ServerConfig;

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// In-process server under test.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Start a server on the given port. The execution URL points at a
    /// closed port so accidental execution calls fail fast.
    pub async fn start(port: u16) -> Self {
        Self::start_with_execution_url(port, "http://127.0.0.1:9/execute".to_string()).await
    }

    /// Start a server whose execution proxy targets the given URL.
    pub async fn start_with_execution_url(port: u16, execution_url: String) -> Self {
        let config = ServerConfig {
            port,
            static_dir: "frontend/dist".to_string(),
            execution_url,
            execution_timeout_secs: 5,
        };
        tokio::spawn(async move {
            if let Err(e) = code_collab_rs::run_server(config).await {
                panic!("test server failed: {e}");
            }
        });
        wait_for_port(port).await;
        Self { port }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }
}

/// Start a stub execution service answering `POST /execute` with a fixed
/// status and JSON body. Returns the URL to point the server at.
pub async fn start_stub_execution_server(
    port: u16,
    status: u16,
    body: serde_json::Value,
) -> String {
    let status = StatusCode::from_u16(status).expect("invalid status code");
    let app = Router::new().route(
        "/execute",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .expect("Failed to bind stub execution server");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("stub execution server failed");
    });
    wait_for_port(port).await;
    format!("http://127.0.0.1:{port}/execute")
}

async fn wait_for_port(port: u16) {
    for _ in 0..250 {
        if TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server on port {port} did not become ready");
}

/// Open a WebSocket connection to the server under test.
pub async fn connect_ws(server: &TestServer) -> WsClient {
    let (socket, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect WebSocket");
    socket
}

/// Send a JSON event to the server.
pub async fn send_json(socket: &mut WsClient, value: serde_json::Value) {
    socket
        .send(Message::Text(value.to_string().into()))
        .await
        .expect("Failed to send WebSocket message");
}

/// Receive the next JSON text message, skipping control frames.
pub async fn recv_json(socket: &mut WsClient) -> serde_json::Value {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(5), socket.next())
            .await
            .expect("timed out waiting for WebSocket message")
            .expect("WebSocket closed unexpectedly")
            .expect("WebSocket error");
        if let Message::Text(text) = msg {
            return serde_json::from_str(&text).expect("server sent invalid JSON");
        }
    }
}

/// Receive messages until one with the given `type` arrives.
pub async fn recv_event(socket: &mut WsClient, event_type: &str) -> serde_json::Value {
    loop {
        let json = recv_json(socket).await;
        if json["type"] == event_type {
            return json;
        }
    }
}

/// Assert that no message arrives within the given window.
pub async fn assert_silent(socket: &mut WsClient, window: Duration) {
    match tokio::time::timeout(window, socket.next()).await {
        Err(_) => {} // timeout: nothing arrived
        Ok(Some(Ok(Message::Text(text)))) => {
            panic!("expected silence but received: {text}");
        }
        Ok(other) => {
            panic!("expected silence but socket yielded: {other:?}");
        }
    }
}

/// Poll the admin API until the given room disappears from the store.
pub async fn wait_until_room_gone(server: &TestServer, room_id: &str) {
    let client = reqwest::Client::new();
    for _ in 0..250 {
        let rooms: serde_json::Value = client
            .get(format!("{}/api/rooms", server.base_url()))
            .send()
            .await
            .expect("Failed to query rooms")
            .json()
            .await
            .expect("Failed to parse rooms");
        let present = rooms
            .as_array()
            .expect("rooms response should be an array")
            .iter()
            .any(|room| room["id"] == room_id);
        if !present {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("room {room_id} still present in the store");
}
