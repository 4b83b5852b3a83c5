use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("expo_dispatch=debug".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap())
            .add_directive("axum=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

/// One request captured by the scripted gateway.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

/// Handle for scripting gateway responses and inspecting captured traffic.
#[derive(Debug, Clone, Default)]
pub struct GatewayState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<(StatusCode, Value)>>>,
}

impl GatewayState {
    pub fn enqueue_response(&self, status: StatusCode, body: Value) {
        self.responses.lock().unwrap().push_back((status, body));
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Spawns a scripted stand-in for the push gateway on an ephemeral port.
///
/// Returns the endpoint URL and the scripting handle. Unscripted requests
/// are answered with a generic ok ticket.
pub async fn spawn_gateway() -> (String, GatewayState) {
    let state = GatewayState::default();
    let app = Router::new()
        .route("/--/api/v2/push/send", post(handle_push))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve scripted gateway");
    });

    (format!("http://{addr}/--/api/v2/push/send"), state)
}

async fn handle_push(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };

    state.requests.lock().unwrap().push(CapturedRequest {
        authorization: header("authorization"),
        content_type: header("content-type"),
        body,
    });

    match state.responses.lock().unwrap().pop_front() {
        Some((status, body)) => (status, Json(body)),
        None => (StatusCode::OK, Json(ok_ticket("0000-default"))),
    }
}

/// Response body for a gateway that accepted the message.
pub fn ok_ticket(id: &str) -> Value {
    json!({ "data": [{ "status": "ok", "id": id }] })
}

/// Response body for a ticket-level rejection.
#[allow(dead_code)]
pub fn error_ticket(code: &str, message: &str) -> Value {
    json!({ "data": [{ "status": "error", "message": message, "details": { "error": code } }] })
}

#[allow(dead_code)]
pub fn test_gateway_config(url: &str) -> expo_dispatch::config::GatewayConfig {
    expo_dispatch::config::GatewayConfig {
        access_token: "test-access-token".to_owned(),
        gateway_url: url.to_owned(),
    }
}
