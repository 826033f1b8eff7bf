pub mod config;
pub mod data;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod rate_limit;
pub mod state;
pub mod sweeper;

pub use error::ApiError;
pub use handlers::create_router;
pub use rate_limit::{ClientWindow, RateLimiter};
pub use state::AppState;
