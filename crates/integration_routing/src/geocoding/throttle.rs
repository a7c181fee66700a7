use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};
use tracing::trace;

/// Hands out request slots at least `interval` apart
///
/// Each caller reserves the next free slot under the lock and waits for it
/// outside the lock, so concurrent callers queue up in arrival order.
#[derive(Debug)]
pub(super) struct Throttle {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl Throttle {
    pub(super) fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    /// Wait until this caller may send its request
    pub(super) async fn acquire(&self) {
        if self.interval.is_zero() {
            return;
        }

        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = next.map_or(now, |reserved| reserved.max(now));
            *next = Some(slot + self.interval);
            slot
        };

        if slot > Instant::now() {
            trace!(wait = ?slot.saturating_duration_since(Instant::now()), "Waiting for request slot");
            sleep_until(slot).await;
        }
    }
}
