use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::pipeline::Clock;
use js_sys::Date;

/// Reads `Date.now()` and sleeps on `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

#[async_trait(?Send)]
impl Clock for BrowserClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(Date::now() as i64).unwrap_or_default()
    }

    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
