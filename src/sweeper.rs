use std::sync::Arc;
use std::time::Instant;
use tokio::time::{Duration, interval};
use tracing::{debug, info};
use crate::metrics::TRACKED_CLIENTS;
use crate::state::AppState;

// Evicts expired client windows so the map doesn't grow forever.
// A client whose window is dropped gets a fresh one on its next request,
// which is exactly what an expired window would have given it.
pub async fn run_sweeper(state: Arc<AppState>, sweep_interval: Duration) {
    let mut interval = interval(sweep_interval);

    info!(interval = ?sweep_interval, "Window sweeper started");

    loop {
        interval.tick().await;

        let removed = state.rate_limiter.sweep(Instant::now());
        let remaining = state.rate_limiter.len();
        TRACKED_CLIENTS.set(remaining as f64);

        if removed > 0 {
            debug!(removed, remaining, "Swept expired client windows");
        }
    }
}
