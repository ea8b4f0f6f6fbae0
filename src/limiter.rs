use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Admits at most `max_requests` operations within any `time_period` window
/// across the whole run.
///
/// Each admission takes a permit and schedules its return `time_period`
/// later; callers beyond the limit suspend until a slot frees.
#[derive(Clone)]
pub struct RateLimiter {
    permits: Arc<Semaphore>,
    time_period: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, time_period: Duration) -> Self {
        RateLimiter {
            permits: Arc::new(Semaphore::new(max_requests)),
            time_period,
        }
    }

    /// Wait for a slot in the current window.
    pub async fn acquire(&self) {
        // The semaphore is never closed while the limiter exists.
        if let Ok(permit) = self.permits.acquire().await {
            permit.forget();

            let permits = Arc::clone(&self.permits);
            let time_period = self.time_period;
            tokio::spawn(async move {
                tokio::time::sleep(time_period).await;
                permits.add_permits(1);
            });
        }
    }
}
