//! MemorySink - イベントをメモリに溜める sink
//!
//! # 学習ポイント
//! - Mutex + Notify による「条件が満たされるまで待つ」
//! - Notified::enable() で通知の取りこぼしを防ぐ

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;

use crate::domain::{Actor, EventKind, ShopEvent};
use crate::ports::EventSink;

/// Records every event in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<ShopEvent>>,
    recorded: Notify,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ShopEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<ShopEvent> {
        self.lock().clone()
    }

    /// Event kinds recorded for one actor, in order.
    pub fn kinds_of(&self, actor: Actor) -> Vec<EventKind> {
        self.lock()
            .iter()
            .filter(|e| e.actor == actor)
            .map(|e| e.kind.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Wait until `predicate` holds for the recorded events.
    pub async fn wait_until<F>(&self, predicate: F)
    where
        F: Fn(&[ShopEvent]) -> bool,
    {
        loop {
            let notified = self.recorded.notified();
            tokio::pin!(notified);
            // 先に登録してから条件を確認する
            notified.as_mut().enable();

            let satisfied = predicate(self.lock().as_slice());
            if satisfied {
                return;
            }
            notified.await;
        }
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: ShopEvent) {
        self.lock().push(event);
        self.recorded.notify_waiters();
    }
}
