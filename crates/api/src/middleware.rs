use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, middleware::Next, response::Response};

use crate::app::services::AppServices;
use crate::context::SessionContext;

/// Attach the current session identity to the request.
///
/// Never rejects; gating happens per route so catalog reads stay public.
pub async fn session_middleware(
    State(services): State<Arc<AppServices>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    req.extensions_mut()
        .insert(SessionContext::new(services.session.current()));

    next.run(req).await
}

/// One log line per request: method, path, status, latency.
pub async fn trace_requests(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = res.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );

    res
}
