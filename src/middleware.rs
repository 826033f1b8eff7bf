use axum::{
    extract::{ConnectInfo, Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use crate::error::ApiError;
use crate::metrics::{RATE_LIMITED_TOTAL, REQUEST_LATENCY, REQUEST_TOTAL, TRACKED_CLIENTS};
use crate::rate_limit::UNKNOWN_CLIENT;
use crate::state::AppState;

// Key a request by its peer IP (port dropped).
// Requests served without connect info all land in the shared "unknown" bucket.
pub fn client_id(req: &Request) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Gate every request through the rate limiter before it reaches a route.
pub async fn rate_limit(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    REQUEST_TOTAL.inc();

    let client = client_id(&req);
    if client == UNKNOWN_CLIENT {
        debug!("No peer address, using shared bucket");
    }

    let admitted = state.rate_limiter.check_admission(&client, Instant::now());
    TRACKED_CLIENTS.set(state.rate_limiter.len() as f64);

    if !admitted {
        RATE_LIMITED_TOTAL.inc();
        warn!(client = %client, path = %req.uri().path(), "Rate limit exceeded");
        return Err(ApiError::RateLimited);
    }

    let start_time = Instant::now();
    let response = next.run(req).await;
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok(response)
}

// OPTIONS gets an empty 200 once it has cleared the rate limiter;
// the CORS headers are added further out.
pub async fn answer_preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}
