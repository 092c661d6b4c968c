//! Shared helpers for the integration tests: an in-process stub backend
//! speaking the `{success, data, error}` envelope.

use axum::Router;
use serde_json::{json, Value};

/// Bind the router on an ephemeral port and serve it in the background.
///
/// Returns the base URL to point the client at.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test app");
    });
    format!("http://{}", addr)
}

/// An address nothing listens on, for network-failure tests.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("listener addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Wire-shaped user record the stub hands out.
pub fn user_json(id: &str, active: bool) -> Value {
    json!({
        "id": id,
        "email": format!("{}@example.com", id),
        "name": "Test User",
        "role": "manager",
        "isActive": active,
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z"
    })
}

/// Wire-shaped product record the stub hands out.
pub fn product_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "price": 9.99,
        "category": "widgets",
        "isActive": true,
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z"
    })
}

/// `success: true` envelope around a payload.
pub fn ok_envelope(data: Value) -> Value {
    json!({ "success": true, "data": data })
}
