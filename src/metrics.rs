use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("petcare_requests_total", "Total number of requests").unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter =
        register_counter!("petcare_rate_limited_total", "Requests rejected by the rate limiter").unwrap();
    pub static ref TRACKED_CLIENTS: Gauge =
        register_gauge!("petcare_tracked_clients", "Client windows currently held by the rate limiter").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "petcare_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
}
