//! Request logging middleware

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

/// Route template of single-plugin lookups
const PLUGIN_ROUTE: &str = "/api/plugins/{id}";

/// Log each request against the route it matched
///
/// Lookups of unregistered plugins and paths outside the route table get
/// their own events so they can be told apart from handler failures.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed_ms = start.elapsed().as_millis() as u64;
    let status = response.status();

    match route.as_deref() {
        Some(PLUGIN_ROUTE) if status == StatusCode::NOT_FOUND => {
            let id = path.rsplit('/').next().unwrap_or_default();
            tracing::info!(plugin_id = %id, "Lookup of unregistered plugin");
        }
        None => tracing::debug!(%method, %path, "No route for request"),
        _ => {}
    }

    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), elapsed_ms, "Request failed");
    } else {
        tracing::info!(
            %method,
            route = route.as_deref().unwrap_or(path.as_str()),
            status = status.as_u16(),
            elapsed_ms,
            "Handled request"
        );
    }

    response
}
