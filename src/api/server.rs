use axum::{
    Extension, Router,
    body::Body,
    http::{
        HeaderName, HeaderValue, Method, Request,
        header::{ACCEPT, CONTENT_TYPE, ORIGIN},
        request::Parts,
    },
    routing::get,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use url::Url;

use super::handlers::{handle_find, handle_health};
use super::protocol::{ENDPOINT_FIND, ENDPOINT_HEALTH, REQUEST_ID_HEADER};
use crate::finder::engine::NumberFinder;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Stamps each request with a random UUID v4 id.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Builds the API router with the finder injected as an `Extension`.
pub fn build_router(finder: Arc<dyn NumberFinder>) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route(ENDPOINT_FIND, get(handle_find))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::new())
                .layer(SetRequestIdLayer::new(request_id.clone(), RequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<Body>| {
                            let request_id = request
                                .headers()
                                .get(REQUEST_ID_HEADER)
                                .and_then(|v| v.to_str().ok())
                                .unwrap_or("-");
                            tracing::info_span!(
                                "request",
                                method = %request.method(),
                                path = %request.uri().path(),
                                request_id,
                            )
                        })
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                .layer(cors_layer()),
        )
        .layer(Extension(finder))
}

/// CORS for browser front ends served from the local machine.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            |origin: &HeaderValue, _parts: &Parts| {
                origin.to_str().map(is_local_origin).unwrap_or(false)
            },
        ))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            ORIGIN,
            ACCEPT,
            CONTENT_TYPE,
            HeaderName::from_static("x-requested-with"),
        ])
}

/// `true` for `http(s)://localhost` and `http(s)://127.0.0.1`, on any valid port.
pub fn is_local_origin(origin: &str) -> bool {
    let Ok(url) = Url::parse(origin) else {
        return false;
    };

    matches!(url.scheme(), "http" | "https")
        && matches!(url.host_str(), Some("localhost") | Some("127.0.0.1"))
}

/// Serves `router` on `listener` until Ctrl+C or SIGTERM, then drains in-flight requests.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("HTTP server listening on {}", addr);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down server");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
