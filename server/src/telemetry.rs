//! Logging set-up and per-request tracing.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::Router;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Paths that get a trace-level span so they stay out of the logs.
const QUIET_PATHS: &[&str] = &["/health"];

/// Install the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wrap a router in the per-request tracing layer.
///
/// Server errors are logged by [`on_response`] only; the failure hook is left
/// empty so a 5xx produces a single `error` event.
pub fn with_request_tracing(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(make_span::<Body>)
            .on_request(())
            .on_response(on_response::<Body>)
            .on_failure(()),
    )
}

fn make_span<B>(request: &Request<B>) -> Span {
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or(request.uri().path());

    if QUIET_PATHS.contains(&matched_path) {
        tracing::trace_span!("http_request")
    } else {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %matched_path,
        )
    }
}

fn on_response<B>(response: &Response<B>, latency: Duration, span: &Span) {
    if span.metadata().map(|m| m.level()) == Some(&tracing::Level::TRACE) {
        return;
    }
    let status = response.status().as_u16();
    if status >= 500 {
        tracing::error!(
            status = %status,
            latency_ms = %latency.as_millis(),
            "request failed with server error"
        );
    } else {
        tracing::info!(
            status = %status,
            latency_ms = %latency.as_millis(),
            "request completed"
        );
    }
}
