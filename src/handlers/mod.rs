mod auth;
mod health;
mod metrics;
mod pets;

pub use auth::login_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use pets::{feeding_handler, pets_handler};

use axum::{
    Router,
    http::{HeaderName, HeaderValue, header},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use crate::error::ApiError;
use crate::middleware::{answer_preflight, rate_limit};
use crate::state::AppState;

// Anything unrouted, including a known path with the wrong method
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

// Permissive CORS headers stamped on every response, 429s and preflights included
pub fn cors_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Authorization, X-Request-ID, X-Request-Time"),
        ),
        // preflights are cached for a day
        (
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static("86400"),
        ),
    ]
}

/// Build the full API router.
///
/// Layers run outside-in: CORS headers, request tracing, the rate limiter,
/// then the preflight short-circuit. Every request, `OPTIONS` included,
/// counts against its client's quota.
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route("/api/pets", get(pets_handler))
        .route("/api/feeding", get(feeding_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/metrics", get(metrics_handler))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(from_fn(answer_preflight))
        .layer(from_fn_with_state(Arc::clone(&state), rate_limit))
        .layer(TraceLayer::new_for_http());

    for (name, value) in cors_headers() {
        router = router.layer(SetResponseHeaderLayer::overriding(name, value));
    }

    router.with_state(state)
}
