use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use ledger_editor::host::{Navigator, Notifier};
use ledger_editor::server::{self, AppState, store::InMemoryDb};
use serde_json::Value;
use tower::util::ServiceExt;

pub struct TestApi {
    pub base_url: String,
    pub state: AppState,
}

/// Serves the seeded in-memory API on an ephemeral local port.
#[allow(dead_code)]
pub async fn spawn_test_api() -> anyhow::Result<TestApi> {
    spawn_api_with(InMemoryDb::seeded()).await
}

#[allow(dead_code)]
pub async fn spawn_api_with(db: InMemoryDb) -> anyhow::Result<TestApi> {
    let state = AppState::new(db);
    let base_url = spawn_router(server::router(state.clone())).await?;
    Ok(TestApi { base_url, state })
}

/// Serves any router on an ephemeral local port and returns its base URL.
/// Used for canned responses the in-memory API never produces.
#[allow(dead_code)]
pub async fn spawn_router(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{}", address))
}

/// Client for local test servers; ignores any proxy configured in the environment.
#[allow(dead_code)]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build http client")
}

/// A base URL nothing listens on, for transport failures.
#[allow(dead_code)]
pub async fn unreachable_base_url() -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", address))
}

#[allow(dead_code)]
pub fn test_router() -> Router {
    server::router(AppState::new(InMemoryDb::seeded()))
}

/// One request against the router without a socket.
#[allow(dead_code)]
pub async fn router_request(
    app: &Router,
    method: &str,
    uri: &str,
    payload: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let body = match payload {
        Some(p) => Body::from(p.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .map_err(|e| anyhow::anyhow!("Failed to build request: {}", e))?;

    let response = app
        .clone()
        .oneshot(request)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to execute request: {}", e))?;

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read response body: {}", e))?;
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()));

    Ok((status, body))
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visits: Vec<(String, bool)>,
}

impl RecordingNavigator {
    #[allow(dead_code)]
    pub fn last_url(&self) -> Option<&str> {
        self.visits.last().map(|(url, _)| url.as_str())
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_by_url(&mut self, url: &str, skip_location_change: bool) {
        self.visits.push((url.to_string(), skip_location_change));
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub successes: Vec<String>,
    pub errors: Vec<String>,
    pub alerts: Vec<String>,
    pub confirms: Vec<String>,
    pub confirm_answer: bool,
}

impl RecordingNotifier {
    #[allow(dead_code)]
    pub fn answering(confirm_answer: bool) -> Self {
        Self {
            confirm_answer,
            ..Self::default()
        }
    }
}

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.confirm_answer
    }
}
