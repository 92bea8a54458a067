//! Wall-clock implementation of [`Clock`]

use super::traits::Clock;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

/// Clock backed by the system time and tokio's timer
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
