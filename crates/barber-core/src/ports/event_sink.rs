//! EventSink port - イベント記録の抽象化
//!
//! 実装は impls/ にある（tracing / JSON lines / メモリ）。

use std::sync::Arc;

use crate::domain::{Actor, EventKind, ShopEvent};
use crate::ports::Clock;

/// EventSink はショップのイベントを受け取る
///
/// # Thread Safety
/// - waiting room のロック内から呼ばれることがあるので、ブロックしないこと
/// - 出力の直列化は sink 自身の責務
pub trait EventSink: Send + Sync {
    fn record(&self, event: ShopEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: ShopEvent) {}
}

/// Emitter は Clock と EventSink をまとめたもの
///
/// Shop / WaitingRoom / Worker はこれを共有して、時刻付きのイベントを出す。
#[derive(Clone)]
pub struct Emitter {
    clock: Arc<dyn Clock>,
    sink: Arc<dyn EventSink>,
}

impl Emitter {
    pub fn new(clock: Arc<dyn Clock>, sink: Arc<dyn EventSink>) -> Self {
        Self { clock, sink }
    }

    /// Stamp `kind` with the current time and hand it to the sink.
    pub fn emit(&self, actor: Actor, kind: EventKind) {
        self.sink.record(ShopEvent::new(self.clock.now(), actor, kind));
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClientId;
    use crate::impls::MemorySink;
    use crate::ports::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn emitter_stamps_events_with_clock_time() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let sink = Arc::new(MemorySink::new());
        let emitter = Emitter::new(Arc::new(FixedClock::new(at)), sink.clone());

        emitter.emit(Actor::Customer(ClientId::new(1)), EventKind::Arrived);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].at, at);
        assert_eq!(events[0].actor, Actor::Customer(ClientId::new(1)));
        assert_eq!(events[0].kind, EventKind::Arrived);
    }
}
