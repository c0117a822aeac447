//! Request pacing between page fetches.

use std::time::Duration;

use tokio::time::sleep;

/// Fixed-interval pacer with optional jitter.
///
/// A single sequential pipeline only needs a flat inter-request delay
/// to keep its request rate bounded; this is intentional fixed pacing,
/// not adaptive backoff.
pub struct RateLimiter {
    interval: Duration,
    jitter: Duration,
}

impl RateLimiter {
    pub fn new(interval_secs: f64, jitter_secs: f64) -> Self {
        Self {
            interval: Duration::from_secs_f64(interval_secs.max(0.0)),
            jitter: Duration::from_secs_f64(jitter_secs.max(0.0)),
        }
    }

    /// Wait out one pacing interval.
    pub async fn acquire(&self) {
        let delay = self.interval + self.jitter.mul_f64(rand_factor());
        sleep(delay).await;
    }
}

/// Generate a pseudo-random jitter factor (0.0 - 1.0)
fn rand_factor() -> f64 {
    use std::time::SystemTime;
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    (nanos % 1000) as f64 / 1000.0
}
