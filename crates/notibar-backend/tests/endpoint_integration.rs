//! Integration tests for the backend against a mock notification server.
//!
//! The server is an axum router bound to an ephemeral port. The backend is
//! driven only through the bridge channels, the way the frontend drives it.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use notibar_bridge::{
    BridgeChannels, MessageFromBackend, MessageToBackend,
    config::Config,
    mark::{MarkKind, MarkRequest},
    toast::ToastType,
};
use tokio::sync::mpsc::{Receiver, Sender};

#[derive(Default)]
struct MockServer {
    reply: &'static str,
    posted: Mutex<Vec<(HashMap<String, String>, Option<String>)>>,
}

async fn mark_handler(
    State(server): State<Arc<MockServer>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> &'static str {
    let requested_with = headers
        .get("x-requested-with")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    server.posted.lock().unwrap().push((form, requested_with));
    server.reply
}

async fn broken_handler() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn page_handler() -> Json<serde_json::Value> {
    let items: Vec<_> = (1..=10)
        .map(|id| serde_json::json!({ "id": id.to_string(), "text": "hi", "unread": true }))
        .collect();
    Json(serde_json::json!({
        "unread_amount": 10,
        "groups": [{ "action": "/notifications/mark/", "csrf_token": "csrf", "items": items }]
    }))
}

/// Starts the mock server and returns its page URL.
async fn spawn_server(server: Arc<MockServer>) -> String {
    let app = Router::new()
        .route("/notifications/", get(page_handler))
        .route("/notifications/mark/", post(mark_handler))
        .route("/notifications/broken/", post(broken_handler))
        .with_state(server);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/notifications/")
}

fn start_backend(
    page_url: String,
) -> (Sender<MessageToBackend>, Receiver<MessageFromBackend>) {
    let mut config = Config::default();
    config.endpoint.page_url = page_url;

    let channels = BridgeChannels::new(8);
    notibar_backend::run_with_config(config, channels.backend_rx, channels.backend_tx);
    (channels.frontend_tx, channels.frontend_rx)
}

async fn next_message(rx: &mut Receiver<MessageFromBackend>) -> Option<MessageFromBackend> {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .ok()
        .flatten()
}

fn single(action: &str, item_id: &str) -> MarkRequest {
    MarkRequest {
        sequence: 1,
        action: action.to_owned(),
        csrf_token: "csrf".to_owned(),
        kind: MarkKind::Single {
            list: 0,
            item_id: item_id.to_owned(),
        },
    }
}

#[tokio::test]
async fn test_single_mark_posts_form() {
    let server = Arc::new(MockServer {
        reply: "marked",
        ..MockServer::default()
    });
    let (tx, mut rx) = start_backend(spawn_server(server.clone()).await);

    let request = single("/notifications/mark/", "7");
    tx.send(MessageToBackend::MarkRequest(request.clone()))
        .await
        .unwrap();

    match next_message(&mut rx).await {
        Some(MessageFromBackend::MarkResponse {
            request: answered,
            body,
        }) => {
            assert_eq!(answered, request);
            assert_eq!(body, "marked");
        }
        other => panic!("expected a mark response, got {other:?}"),
    }

    let posted = server.posted.lock().unwrap();
    assert_eq!(posted.len(), 1);
    let (form, requested_with) = &posted[0];
    assert_eq!(form.get("single_mark").map(String::as_str), Some("7"));
    assert_eq!(form.get("csrfmiddlewaretoken").map(String::as_str), Some("csrf"));
    assert_eq!(requested_with.as_deref(), Some("XMLHttpRequest"));
}

#[tokio::test]
async fn test_bulk_mark_posts_token() {
    let server = Arc::new(MockServer {
        reply: "marked",
        ..MockServer::default()
    });
    let (tx, mut rx) = start_backend(spawn_server(server.clone()).await);

    let request = MarkRequest {
        sequence: 3,
        action: "/notifications/mark/".to_owned(),
        csrf_token: "csrf".to_owned(),
        kind: MarkKind::Bulk {
            list: 0,
            token: "1, 2, ".to_owned(),
        },
    };
    tx.send(MessageToBackend::MarkRequest(request))
        .await
        .unwrap();

    assert!(matches!(
        next_message(&mut rx).await,
        Some(MessageFromBackend::MarkResponse { body, .. }) if body == "marked"
    ));
    let posted = server.posted.lock().unwrap();
    assert_eq!(posted[0].0.get("bulk_mark").map(String::as_str), Some("1, 2, "));
}

#[tokio::test]
async fn test_other_body_is_forwarded_verbatim() {
    let server = Arc::new(MockServer {
        reply: "error",
        ..MockServer::default()
    });
    let (tx, mut rx) = start_backend(spawn_server(server).await);

    tx.send(MessageToBackend::MarkRequest(single("/notifications/mark/", "7")))
        .await
        .unwrap();

    assert!(matches!(
        next_message(&mut rx).await,
        Some(MessageFromBackend::MarkResponse { body, .. }) if body == "error"
    ));
}

#[tokio::test]
async fn test_failed_status_is_silent() {
    let server = Arc::new(MockServer::default());
    let (tx, mut rx) = start_backend(spawn_server(server).await);

    tx.send(MessageToBackend::MarkRequest(single("/notifications/broken/", "7")))
        .await
        .unwrap();

    let silence = tokio::time::timeout(Duration::from_millis(500), rx.recv()).await;
    assert!(silence.is_err(), "a failed mark request must not be answered");
}

#[tokio::test]
async fn test_page_is_truncated() {
    let server = Arc::new(MockServer::default());
    let (tx, mut rx) = start_backend(spawn_server(server).await);

    tx.send(MessageToBackend::NotificationPageRequest)
        .await
        .unwrap();

    match next_message(&mut rx).await {
        Some(MessageFromBackend::NotificationPageResponse(page)) => {
            assert_eq!(page.unread_amount, 10);
            assert_eq!(page.groups.len(), 1);
            assert_eq!(page.groups[0].items.len(), 8);
        }
        other => panic!("expected the notification page, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_page_raises_toast() {
    let server = Arc::new(MockServer::default());
    let page_url = spawn_server(server).await;
    let (tx, mut rx) = start_backend(format!("{page_url}missing/"));

    tx.send(MessageToBackend::NotificationPageRequest)
        .await
        .unwrap();

    match next_message(&mut rx).await {
        Some(MessageFromBackend::ToastMessage(toast)) => {
            assert_eq!(toast.toast_type, ToastType::Error);
        }
        other => panic!("expected an error toast, got {other:?}"),
    }
}
