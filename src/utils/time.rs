// src/utils/time.rs - Cross-platform time utilities

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Clock and timer helpers that behave the same on desktop and in the browser
pub struct Time;

impl Time {
    /// Current UTC time
    pub fn now() -> DateTime<Utc> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Utc::now()
        }

        #[cfg(target_arch = "wasm32")]
        {
            let millis = js_sys::Date::now() as i64;
            DateTime::from_timestamp_millis(millis).unwrap_or_default()
        }
    }

    /// Suspends the current task. Used for the simulated network delays.
    pub async fn sleep(duration: Duration) {
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;

        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_monotonic_enough() {
        let first = Time::now();
        let second = Time::now();
        assert!(second >= first);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_waits_for_duration() {
        let start = tokio::time::Instant::now();
        Time::sleep(Duration::from_millis(1500)).await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
