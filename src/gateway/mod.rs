use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use serde::Serialize;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::GatewayError;
use crate::state::GatewayState;

/// Gateway router: `/api/*` and `/admin/*` are forwarded verbatim to the
/// upstream backend, everything else is served from the static asset
/// directory with `index.html` as the single-page fallback.
pub fn router(state: Arc<GatewayState>) -> Router {
    let spa = ServeDir::new(&state.static_dir)
        .not_found_service(ServeFile::new(state.static_dir.join("index.html")));

    Router::new()
        .route("/api", any(forward))
        .route("/api/*path", any(forward))
        .route("/admin", any(forward))
        .route("/admin/*path", any(forward))
        .route("/healthz", get(health))
        .route("/metrics", get(metrics))
        .with_state(state)
        .fallback_service(spa)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    upstream: String,
}

async fn health(State(state): State<Arc<GatewayState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        upstream: state.upstream_url.clone(),
    })
}

async fn metrics(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
    match state.metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err).into_response(),
    }
}

async fn forward(
    State(state): State<Arc<GatewayState>>,
    req: Request,
) -> Result<Response, GatewayError> {
    let (parts, body) = req.into_parts();

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| parts.uri.path().to_string());
    let route = if path_and_query.starts_with("/admin") {
        "admin"
    } else {
        "api"
    };
    let url = format!("{}{}", state.upstream_url, path_and_query);

    let mut outbound = state.http.request(parts.method.clone(), url.clone());
    for (name, value) in parts.headers.iter() {
        if is_forwardable(name) {
            outbound = outbound.header(name, value);
        }
    }

    let started = Instant::now();
    let outbound_body = reqwest::Body::wrap_stream(body.into_data_stream());
    let upstream = match outbound.body(outbound_body).send().await {
        Ok(response) => response,
        Err(err) => {
            state
                .metrics
                .proxied_requests_total
                .with_label_values(&[route, "unreachable"])
                .inc();
            tracing::warn!(url = %url, error = %err, "upstream unreachable");
            return Err(GatewayError::Upstream(format!("{url}: {err}")));
        }
    };
    state
        .metrics
        .upstream_latency_seconds
        .with_label_values(&[route])
        .observe(started.elapsed().as_secs_f64());

    let status = upstream.status();
    state
        .metrics
        .proxied_requests_total
        .with_label_values(&[route, status_class(status)])
        .inc();

    let mut builder = Response::builder().status(status);
    if let Some(headers) = builder.headers_mut() {
        for (name, value) in upstream.headers() {
            if is_forwardable(name) {
                headers.append(name.clone(), value.clone());
            }
        }
    }

    // Bodies stream through untouched; nothing is buffered gateway-side.
    builder
        .body(Body::from_stream(upstream.bytes_stream()))
        .map_err(|err| GatewayError::Internal(format!("failed to build response: {err}")))
}

// Hop-by-hop headers never cross the proxy; host is rewritten for the
// upstream origin. Content-length survives because bodies are relayed
// unmodified.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

fn is_forwardable(name: &HeaderName) -> bool {
    let name = name.as_str();
    name != header::HOST.as_str() && !HOP_BY_HOP.contains(&name)
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() / 100 {
        2 => "2xx",
        3 => "3xx",
        4 => "4xx",
        5 => "5xx",
        _ => "other",
    }
}
