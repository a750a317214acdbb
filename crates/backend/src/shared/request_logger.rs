use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

/// One log line per request: method, uri, status, latency and body size.
/// The response body is buffered to measure it and passed on unchanged.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let (parts, body) = next.run(req).await.into_parts();
    let status = parts.status.as_u16();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(%method, %uri, status, "could not buffer response body: {}", e);
            return Response::from_parts(parts, Body::empty());
        }
    };

    let elapsed_ms = started.elapsed().as_millis() as u64;
    let size = bytes.len();
    if parts.status.is_client_error() || parts.status.is_server_error() {
        tracing::warn!(%method, %uri, status, elapsed_ms, size, "request failed");
    } else {
        tracing::info!(%method, %uri, status, elapsed_ms, size, "request served");
    }

    Response::from_parts(parts, Body::from(bytes))
}
