//! Local axum servers standing in for the catalog and the Telegram API.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral localhost port
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    addr
}

/// Catalog search stub. Answers 403 to clients without a browser user agent,
/// like the real catalog does.
pub fn catalog_app(body: Value) -> Router {
    Router::new().route(
        "/m_action/api/category/",
        get(move |headers: HeaderMap| {
            let body = body.clone();
            async move {
                let browser = headers
                    .get("user-agent")
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|ua| ua.contains("Chrome/117"));
                if browser {
                    (StatusCode::OK, Json(body))
                } else {
                    (StatusCode::FORBIDDEN, Json(json!({"error": "blocked"})))
                }
            }
        }),
    )
}

/// Catalog stub that never answers within `delay`
pub fn slow_catalog_app(delay: Duration) -> Router {
    Router::new().route(
        "/m_action/api/category/",
        get(move || async move {
            tokio::time::sleep(delay).await;
            Json(json!({"result": {"products_total": 1}}))
        }),
    )
}

pub fn catalog_url(addr: SocketAddr) -> String {
    format!("http://{addr}/m_action/api/category/?search=Phantasmal%20Flames")
}

/// Captured `sendMessage` payloads
pub type Inbox = Arc<Mutex<Vec<Value>>>;

/// Telegram stub recording each `sendMessage` body for `token`
pub fn telegram_app(token: &str, status: StatusCode) -> (Router, Inbox) {
    let inbox: Inbox = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            &format!("/bot{token}/sendMessage"),
            post(
                move |State(inbox): State<Inbox>, Json(payload): Json<Value>| async move {
                    inbox.lock().unwrap().push(payload);
                    (status, Json(json!({"ok": status.is_success()})))
                },
            ),
        )
        .with_state(inbox.clone());
    (app, inbox)
}

/// Poll `inbox` until it holds at least `count` messages
pub async fn wait_for_messages(inbox: &Inbox, count: usize) -> Vec<Value> {
    for _ in 0..200 {
        {
            let messages = inbox.lock().unwrap();
            if messages.len() >= count {
                return messages.clone();
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for {count} messages");
}
