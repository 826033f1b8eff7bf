use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::time::{Duration, Instant};

pub const WINDOW_DURATION: Duration = Duration::from_millis(60_000);
pub const MAX_REQUESTS_PER_WINDOW: u32 = 100;

// Longest window accepted; larger values are clamped so `now + window`
// stays representable.
pub const MAX_WINDOW_DURATION: Duration = Duration::from_secs(365 * 24 * 60 * 60);

// Client key used when the peer address can't be resolved.
// Every address-less client shares this one window.
pub const UNKNOWN_CLIENT: &str = "unknown";

// Rate limit window - tracks requests per client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientWindow {
    pub count: u32,
    pub reset_time: Instant,
}

/// Fixed-window request counter keyed by client identifier.
///
/// A window opens on a client's first request and lasts `window`. The first
/// request seen after it expires opens a fresh one, so bursts straddling a
/// boundary can admit up to twice `max_requests`.
pub struct RateLimiter {
    windows: DashMap<String, ClientWindow>,
    max_requests: u32,
    window: Duration,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(MAX_REQUESTS_PER_WINDOW, WINDOW_DURATION)
    }
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            window: window.min(MAX_WINDOW_DURATION),
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn window_duration(&self) -> Duration {
        self.window
    }

    /// Decide whether a request from `client_id` at `now` is admitted.
    ///
    /// The entry stays locked for the whole check-and-update, so concurrent
    /// callers for the same client are serialized.
    pub fn check_admission(&self, client_id: &str, now: Instant) -> bool {
        match self.windows.entry(client_id.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(ClientWindow {
                    count: 1,
                    reset_time: now + self.window,
                });
                true
            }
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();

                // window expired..? reset it
                if now > entry.reset_time {
                    entry.count = 1;
                    entry.reset_time = now + self.window;
                    return true;
                }

                if entry.count >= self.max_requests {
                    return false;
                }

                entry.count += 1;
                true
            }
        }
    }

    pub fn window(&self, client_id: &str) -> Option<ClientWindow> {
        self.windows.get(client_id).map(|entry| *entry)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Drop every window that has expired by `now`. Returns how many went.
    pub fn sweep(&self, now: Instant) -> usize {
        let before = self.windows.len();
        self.windows.retain(|_, entry| now <= entry.reset_time);
        before.saturating_sub(self.windows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fresh_client_is_admitted_with_new_window() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();

        assert!(limiter.check_admission("A", t0));

        let window = limiter.window("A").expect("window created");
        assert_eq!(window.count, 1);
        assert_eq!(window.reset_time, t0 + ms(60_000));
    }

    #[test]
    fn admits_full_quota_inside_window() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();

        for i in 0..100u64 {
            let t = t0 + ms(i * 500);
            assert!(limiter.check_admission("A", t), "request {} should be admitted", i + 1);
        }
        assert_eq!(limiter.window("A").map(|w| w.count), Some(100));
    }

    #[test]
    fn rejects_over_quota_without_touching_count() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();

        for _ in 0..100 {
            assert!(limiter.check_admission("A", t0));
        }
        let before = limiter.window("A");

        assert!(!limiter.check_admission("A", t0 + ms(59_999)));
        assert!(!limiter.check_admission("A", t0 + ms(60_000)));
        assert_eq!(limiter.window("A"), before);
    }

    #[test]
    fn resets_after_window_expires() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();

        for _ in 0..101 {
            limiter.check_admission("A", t0);
        }

        let t = t0 + ms(60_001);
        assert!(limiter.check_admission("A", t));

        let window = limiter.window("A").unwrap();
        assert_eq!(window.count, 1);
        assert_eq!(window.reset_time, t + ms(60_000));
    }

    #[test]
    fn clients_have_independent_windows() {
        let limiter = RateLimiter::default();
        let t = Instant::now();

        for _ in 0..100 {
            limiter.check_admission("A", t);
        }
        assert!(!limiter.check_admission("A", t));

        assert!(limiter.check_admission("B", t));
        assert_eq!(limiter.window("B").map(|w| w.count), Some(1));
        assert_eq!(limiter.len(), 2);
    }

    #[test]
    fn concurrent_requests_never_exceed_quota() {
        let limiter = Arc::new(RateLimiter::default());
        let admitted = Arc::new(AtomicU32::new(0));
        let rejected = Arc::new(AtomicU32::new(0));
        let now = Instant::now();

        let handles: Vec<_> = (0..200)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                let admitted = Arc::clone(&admitted);
                let rejected = Arc::clone(&rejected);
                std::thread::spawn(move || {
                    if limiter.check_admission("A", now) {
                        admitted.fetch_add(1, Ordering::SeqCst);
                    } else {
                        rejected.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(admitted.load(Ordering::SeqCst), 100);
        assert_eq!(rejected.load(Ordering::SeqCst), 100);
        assert_eq!(limiter.window("A").map(|w| w.count), Some(100));
    }

    #[test]
    fn oversized_window_is_clamped() {
        let limiter = RateLimiter::new(1, Duration::MAX);
        assert_eq!(limiter.window_duration(), MAX_WINDOW_DURATION);
        assert_eq!(limiter.max_requests(), 1);

        let t0 = Instant::now();
        assert!(limiter.check_admission("A", t0));
        assert_eq!(
            limiter.window("A").map(|w| w.reset_time),
            Some(t0 + MAX_WINDOW_DURATION)
        );
        assert!(!limiter.check_admission("A", t0 + ms(1)));
    }

    #[test]
    fn sweep_only_drops_expired_windows() {
        let limiter = RateLimiter::new(5, ms(1_000));
        let t0 = Instant::now();

        limiter.check_admission("old", t0);
        limiter.check_admission("new", t0 + ms(800));

        assert_eq!(limiter.sweep(t0 + ms(1_000)), 0);
        assert_eq!(limiter.sweep(t0 + ms(1_001)), 1);
        assert!(limiter.window("old").is_none());
        assert!(limiter.window("new").is_some());
    }

    #[test]
    fn swept_client_starts_fresh() {
        let limiter = RateLimiter::new(2, ms(1_000));
        let t0 = Instant::now();

        limiter.check_admission("A", t0);
        limiter.check_admission("A", t0);
        assert!(!limiter.check_admission("A", t0));

        let later = t0 + ms(2_000);
        limiter.sweep(later);
        assert!(limiter.is_empty());

        assert!(limiter.check_admission("A", later));
        assert_eq!(limiter.window("A").map(|w| w.count), Some(1));
    }
}
