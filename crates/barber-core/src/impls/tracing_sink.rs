//! TracingSink - イベントを `tracing` で出力する sink
//!
//! 1 イベント 1 行。先頭は開始マーカーからの経過ミリ秒。

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::ShopEvent;
use crate::ports::{Clock, EventSink};

pub struct TracingSink {
    start: DateTime<Utc>,
}

impl TracingSink {
    /// Start marker is taken from `clock` now.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::starting_at(clock.now())
    }

    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self { start }
    }

    /// Milliseconds between the start marker and `event`.
    pub fn elapsed_ms(&self, event: &ShopEvent) -> i64 {
        (event.at - self.start).num_milliseconds()
    }

    /// The rendered console line for `event`.
    pub fn line(&self, event: &ShopEvent) -> String {
        format!("{} {}", self.elapsed_ms(event), event)
    }
}

impl EventSink for TracingSink {
    fn record(&self, event: ShopEvent) {
        tracing::info!(target: "barber::events", "{}", self.line(&event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Actor, ClientId, EventKind};
    use crate::ports::FixedClock;
    use chrono::{Duration, TimeZone};

    #[test]
    fn line_is_relative_to_start_marker() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let sink = TracingSink::new(Arc::new(FixedClock::new(start)));

        let event = ShopEvent::new(
            start + Duration::milliseconds(412),
            Actor::Customer(ClientId::new(3)),
            EventKind::Seated { chair: 2 },
        );

        assert_eq!(sink.elapsed_ms(&event), 412);
        assert_eq!(sink.line(&event), "412 Customer (3) sat on the 2. chair.");
    }
}
