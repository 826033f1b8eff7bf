use clap::Parser; // for cli
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use petcare_api::{
    AppState, RateLimiter, config::Args, create_router, sweeper::run_sweeper,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // parse cli arguments
    let args = Args::parse();

    let limiter = RateLimiter::new(args.rate_limit, args.rate_window());
    let state = Arc::new(AppState::new(limiter));

    // background eviction of expired windows
    if let Some(every) = args.sweep_every() {
        tokio::spawn(run_sweeper(Arc::clone(&state), every));
    }

    info!(
        max_requests = state.rate_limiter.max_requests(),
        window = ?state.rate_limiter.window_duration(),
        "Rate limiter ready"
    );

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = TcpListener::bind(addr).await?;

    info!(
        "Pet Care API running on http://localhost:{}",
        args.port
    );
    info!("Health check:  http://localhost:{}/health", args.port);
    info!("Pet list:      http://localhost:{}/api/pets", args.port);
    info!("Feeding log:   http://localhost:{}/api/feeding", args.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
