use clap::Parser;
use std::time::Duration;

use crate::rate_limit::{MAX_REQUESTS_PER_WINDOW, WINDOW_DURATION};

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "petcare-api")]
#[command(about = "Demo pet care API with per-client rate limiting")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    // Rate limit max requests per window
    #[arg(long, default_value_t = MAX_REQUESTS_PER_WINDOW)]
    pub rate_limit: u32,

    // Rate limit window in milliseconds
    #[arg(long, default_value_t = WINDOW_DURATION.as_millis() as u64)]
    pub rate_window_ms: u64,

    // How often expired windows are swept, in seconds (0 = never)
    #[arg(long, default_value_t = 60)]
    pub sweep_interval: u64,
}

impl Args {
    pub fn rate_window(&self) -> Duration {
        Duration::from_millis(self.rate_window_ms)
    }

    pub fn sweep_every(&self) -> Option<Duration> {
        (self.sweep_interval > 0).then(|| Duration::from_secs(self.sweep_interval))
    }
}
