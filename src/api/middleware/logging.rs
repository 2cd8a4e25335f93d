//! Access log for the user API

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// Headers worth recording on the access log line
const LOGGED_HEADERS: &[&str] = &["content-type", "content-length", "accept", "user-agent"];

/// Headers whose values never reach the log
const REDACTED_HEADERS: &[&str] = &["authorization", "cookie"];

/// Route segment holding the user ID
const USER_ID_SEGMENT: &str = "{id}";

/// Logs one line when a request arrives and one when it completes.
///
/// Runs inside the `TraceLayer` span, so it opens no span of its own.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let entry = RequestLog::from_request(&request);

    info!(
        method = %entry.method,
        route = %entry.route,
        user_id = entry.user_id.as_deref().unwrap_or("-"),
        request_id = %entry.request_id,
        headers = %entry.headers,
        "Incoming request"
    );

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis();

    if response.status().is_server_error() {
        warn!(
            method = %entry.method,
            route = %entry.route,
            status,
            duration_ms = %duration_ms,
            request_id = %entry.request_id,
            "Request failed"
        );
    } else {
        info!(
            method = %entry.method,
            route = %entry.route,
            status,
            duration_ms = %duration_ms,
            request_id = %entry.request_id,
            "Request completed"
        );
    }

    response
}

/// Fields captured before the request is handed on
struct RequestLog {
    method: Method,
    /// Matched route template, or the raw path when nothing matched
    route: String,
    user_id: Option<String>,
    request_id: String,
    headers: String,
}

impl RequestLog {
    fn from_request(request: &Request<Body>) -> Self {
        let matched = request.extensions().get::<MatchedPath>().map(MatchedPath::as_str);
        Self::with_route(request, matched)
    }

    fn with_route(request: &Request<Body>, matched: Option<&str>) -> Self {
        let path = request.uri().path();

        Self {
            method: request.method().clone(),
            route: matched.unwrap_or(path).to_string(),
            user_id: matched
                .and_then(|route| user_id_segment(route, path))
                .map(str::to_string),
            request_id: request
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-")
                .to_string(),
            headers: loggable_headers(request),
        }
    }
}

/// Pick the concrete `{id}` value out of `path` for a route like `/api/users/{id}`
fn user_id_segment<'a>(route: &str, path: &'a str) -> Option<&'a str> {
    route
        .split('/')
        .zip(path.split('/'))
        .find(|(template, _)| *template == USER_ID_SEGMENT)
        .map(|(_, value)| value)
}

fn loggable_headers(request: &Request<Body>) -> String {
    request
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            let name = name.as_str();

            if REDACTED_HEADERS.contains(&name) {
                Some(format!("{}=[REDACTED]", name))
            } else if LOGGED_HEADERS.contains(&name) {
                Some(format!("{}={}", name, value.to_str().unwrap_or("[invalid]")))
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
