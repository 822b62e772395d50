//! Loopback tests for the WebSocket transport.

use futures_util::{SinkExt, StreamExt};
use gridlock_transport::{Connection, Transport, WebSocketTransport};
use tokio_tungstenite::tungstenite::Message;

async fn bind() -> (WebSocketTransport, String) {
    let transport = WebSocketTransport::bind("127.0.0.1:0").await.unwrap();
    let addr = transport.local_addr().unwrap().to_string();
    (transport, addr)
}

#[tokio::test]
async fn test_accept_and_receive_text_frame() {
    let (mut transport, addr) = bind().await;

    let client = tokio::spawn(async move {
        let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{addr}"))
            .await
            .unwrap();
        ws.send(Message::text("hello")).await.unwrap();
        ws
    });

    let conn = transport.accept().await.unwrap();
    let received = conn.recv().await.unwrap();
    assert_eq!(received.as_deref(), Some("hello"));

    let _ws = client.await.unwrap();
}

#[tokio::test]
async fn test_send_reaches_client() {
    let (mut transport, addr) = bind().await;

    let client = tokio::spawn(async move {
        let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{addr}"))
            .await
            .unwrap();
        ws.next().await.unwrap().unwrap()
    });

    let conn = transport.accept().await.unwrap();
    conn.send("{\"command\":\"error\"}").await.unwrap();

    let msg = client.await.unwrap();
    assert_eq!(msg.into_text().unwrap().as_str(), "{\"command\":\"error\"}");
}

#[tokio::test]
async fn test_binary_frames_are_read_as_text() {
    let (mut transport, addr) = bind().await;

    let client = tokio::spawn(async move {
        let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{addr}"))
            .await
            .unwrap();
        ws.send(Message::binary(b"{\"command\":\"join\"}".to_vec()))
            .await
            .unwrap();
        ws
    });

    let conn = transport.accept().await.unwrap();
    let received = conn.recv().await.unwrap();
    assert_eq!(received.as_deref(), Some("{\"command\":\"join\"}"));

    let _ws = client.await.unwrap();
}

#[tokio::test]
async fn test_clean_close_yields_none() {
    let (mut transport, addr) = bind().await;

    let client = tokio::spawn(async move {
        let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{addr}"))
            .await
            .unwrap();
        ws.close(None).await.unwrap();
    });

    let conn = transport.accept().await.unwrap();
    assert!(conn.recv().await.unwrap().is_none());

    client.await.unwrap();
}

#[tokio::test]
async fn test_connections_get_distinct_ids() {
    let (mut transport, addr) = bind().await;

    let addr2 = addr.clone();
    let clients = tokio::spawn(async move {
        let a = tokio_tungstenite::connect_async(format!("ws://{addr2}"))
            .await
            .unwrap();
        let b = tokio_tungstenite::connect_async(format!("ws://{addr2}"))
            .await
            .unwrap();
        (a, b)
    });

    let first = transport.accept().await.unwrap();
    let second = transport.accept().await.unwrap();
    assert_ne!(first.id(), second.id());

    let _clients = clients.await.unwrap();
}
