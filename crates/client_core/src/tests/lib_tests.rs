use super::*;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Debug, Clone)]
struct RecordedRequest {
    path_id: Option<i64>,
    content_type: Option<String>,
    body: serde_json::Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    reply: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn handle_order(
    State(state): State<StubState>,
    headers: axum::http::HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.requests.lock().await.push(RecordedRequest {
        path_id: None,
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });
    (state.status, state.reply.clone())
}

async fn handle_toggle(
    State(state): State<StubState>,
    Path(id): Path<i64>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.requests.lock().await.push(RecordedRequest {
        path_id: Some(id),
        content_type: None,
        body,
    });
    (state.status, state.reply.clone())
}

async fn spawn_stub_server(
    status: StatusCode,
    reply: &str,
) -> (String, Arc<Mutex<Vec<RecordedRequest>>>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status,
        reply: reply.to_string(),
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/update_worker_order", post(handle_order))
        .route("/toggle_off_worker/:id", post(handle_toggle))
        .route("/roster/workers/:id/off", post(handle_toggle))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), requests)
}

#[tokio::test]
async fn update_worker_order_posts_full_order_as_json() {
    let (server_url, requests) = spawn_stub_server(StatusCode::OK, r#"{"success":true}"#).await;
    let client = RosterClient::new(&server_url).expect("client");

    client
        .update_worker_order(&[WorkerId(7), WorkerId(3), WorkerId(9)])
        .await
        .expect("order update");

    let requests = requests.lock().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, serde_json::json!({ "order": [7, 3, 9] }));
    assert_eq!(
        requests[0].content_type.as_deref(),
        Some("application/json")
    );
}

#[tokio::test]
async fn update_worker_order_surfaces_backend_message_from_error_status() {
    let (server_url, _) = spawn_stub_server(
        StatusCode::BAD_REQUEST,
        r#"{"success":false,"message":"순서 데이터가 없습니다."}"#,
    )
    .await;
    let client = RosterClient::new(&server_url).expect("client");

    let err = client
        .update_worker_order(&[])
        .await
        .expect_err("must be rejected");
    assert!(err.is_rejection(), "unexpected error: {err}");
    assert_eq!(err.backend_message(), Some("순서 데이터가 없습니다."));
}

#[tokio::test]
async fn non_json_error_page_is_a_status_error() {
    let (server_url, _) = spawn_stub_server(
        StatusCode::INTERNAL_SERVER_ERROR,
        "<html>Internal Server Error</html>",
    )
    .await;
    let client = RosterClient::new(&server_url).expect("client");

    let err = client
        .update_worker_order(&[WorkerId(1)])
        .await
        .expect_err("must fail");
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("Internal Server Error"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let (server_url, _) = spawn_stub_server(StatusCode::OK, "saved").await;
    let client = RosterClient::new(&server_url).expect("client");

    let err = client
        .update_worker_order(&[WorkerId(1)])
        .await
        .expect_err("must fail");
    assert!(matches!(err, ClientError::Decode(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn toggle_sends_candidate_and_returns_authoritative_state() {
    // Backend refuses the flip (e.g. minimum staffing) and reports the stored value.
    let (server_url, requests) =
        spawn_stub_server(StatusCode::OK, r#"{"success":true,"is_off":false}"#).await;
    let client = RosterClient::new(&server_url).expect("client");

    let is_off = client
        .toggle_off_worker(WorkerId(4), true)
        .await
        .expect("toggle");
    assert!(!is_off);

    let requests = requests.lock().await;
    assert_eq!(requests[0].path_id, Some(4));
    assert_eq!(requests[0].body, serde_json::json!({ "is_off": true }));
}

#[tokio::test]
async fn toggle_success_without_state_is_invalid() {
    let (server_url, _) = spawn_stub_server(StatusCode::OK, r#"{"success":true}"#).await;
    let client = RosterClient::new(&server_url).expect("client");

    let err = client
        .toggle_off_worker(WorkerId(4), true)
        .await
        .expect_err("must fail");
    assert!(matches!(err, ClientError::InvalidResponse(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn toggle_uses_configured_path_template() {
    let (server_url, requests) =
        spawn_stub_server(StatusCode::OK, r#"{"success":true,"is_off":true}"#).await;
    let endpoints = Endpoints {
        order_path: "/roster/order".into(),
        toggle_path: "/roster/workers/{id}/off".into(),
    };
    let client = RosterClient::with_endpoints(&server_url, endpoints).expect("client");

    assert!(client
        .toggle_off_worker(WorkerId(12), true)
        .await
        .expect("toggle"));
    assert_eq!(requests.lock().await[0].path_id, Some(12));
}

#[tokio::test]
async fn unreachable_server_is_an_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let client = RosterClient::new(&format!("http://{addr}")).expect("client");

    let err = client
        .update_worker_order(&[WorkerId(1)])
        .await
        .expect_err("must fail");
    assert!(matches!(err, ClientError::Http(_)), "unexpected error: {err}");
}

#[test]
fn toggle_path_requires_worker_placeholder() {
    let endpoints = Endpoints {
        order_path: DEFAULT_ORDER_PATH.into(),
        toggle_path: "/toggle_off_worker".into(),
    };
    let err = RosterClient::with_endpoints("http://127.0.0.1:5000", endpoints)
        .expect_err("must reject");
    assert!(matches!(err, ClientError::Endpoint(_)));
}

#[test]
fn endpoint_urls_keep_base_path_prefix() {
    let client = RosterClient::new("http://example.test/admin").expect("client");
    assert_eq!(client.base_url().as_str(), "http://example.test/admin/");
    assert_eq!(
        client
            .endpoint_url(&client.endpoints().toggle_path_for(WorkerId(3)))
            .expect("url")
            .as_str(),
        "http://example.test/admin/toggle_off_worker/3"
    );
}

#[test]
fn rejects_unparseable_server_url() {
    let err = RosterClient::new("not a url").expect_err("must reject");
    assert!(matches!(err, ClientError::Endpoint(_)));
}
