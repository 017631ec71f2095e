use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

const DEFAULT_NODE_URL: &str = "http://localhost:8080";

#[derive(Clone)]
struct AppState {
    node_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct FindParams {
    number: String,
    #[serde(rename = "thresholdPercentage")]
    threshold_percentage: Option<String>,
}

#[derive(Serialize)]
struct ProxyResponse {
    status: u16,
    body: serde_json::Value,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let node_url = normalize_node_url(
        &std::env::var("NODE_URL").unwrap_or_else(|_| DEFAULT_NODE_URL.to_string()),
    );
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;

    let state = AppState {
        node_url,
        client: reqwest::Client::new(),
    };

    let app = Router::new()
        .route("/", get(ui))
        .route("/api/find", get(api_find))
        .with_state(state);

    tracing::info!("UI listening on {}", bind_addr);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

async fn api_find(
    State(state): State<AppState>,
    Query(params): Query<FindParams>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    let url = find_url(
        &state.node_url,
        &params.number,
        params.threshold_percentage.as_deref(),
    );

    let resp = state
        .client
        .get(url)
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    let status = resp.status().as_u16();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or_else(|_| serde_json::json!({"error": "invalid json"}));

    Ok(Json(ProxyResponse { status, body }))
}

/// Lookup URL on the API node. An empty threshold is left off so the node applies its default.
fn find_url(node_url: &str, number: &str, threshold_percentage: Option<&str>) -> String {
    let mut url = format!(
        "{}/api/number/{}",
        node_url,
        urlencoding::encode(number.trim())
    );

    if let Some(threshold) = threshold_percentage
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        url.push_str("?thresholdPercentage=");
        url.push_str(&urlencoding::encode(threshold));
    }

    url
}

/// The API node is fixed at startup; requests cannot redirect the proxy elsewhere.
fn normalize_node_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_NODE_URL.to_string();
    }

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}
