//! WaitingRoom - 待合室（容量付き FIFO）
//!
//! # 学習ポイント
//! - `Mutex<VecDeque>` + `Notify` による monitor
//! - 入店（try_admit）は決してブロックしない。満席なら即座に拒否
//! - 取り出し（take_blocking）は客が来るかキャンセルされるまで待つ
//!
//! `Notify` は「客がいるかもしれない」というヒントに過ぎない。客を返すのは
//! 必ずロック内の `pop_front` なので、通知だけ受け取って空のキューを
//! 見る、ということは起こらない。

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use crate::domain::{Actor, Client, EventKind, Occupancy, ShopError};
use crate::ports::Emitter;

/// Result of an admission attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum AdmitOutcome {
    /// Seated on the `chair`-th seat (1-based, counted from the head).
    Admitted { chair: usize },
    /// Every chair was taken. The client is handed back untouched.
    Rejected(Client),
}

impl AdmitOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, AdmitOutcome::Admitted { .. })
    }
}

/// Capacity-bounded FIFO handoff between admission and service.
///
/// Invariant: `0 <= len() <= capacity()` at all times.
#[derive(Debug)]
pub struct WaitingRoom {
    queue: Mutex<VecDeque<Client>>,
    capacity: usize,
    /// push 時の通知用
    available: Notify,
    emitter: Emitter,
}

impl WaitingRoom {
    pub fn new(capacity: usize, emitter: Emitter) -> Result<Self, ShopError> {
        if capacity == 0 {
            return Err(ShopError::InvalidConfiguration {
                field: "chairs",
                value: capacity,
            });
        }
        Ok(Self {
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            available: Notify::new(),
            emitter,
        })
    }

    // キュー操作中に panic することはないので、poison されていても中身は整合している
    fn lock(&self) -> MutexGuard<'_, VecDeque<Client>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn occupancy_of(&self, queue: &VecDeque<Client>) -> Occupancy {
        Occupancy {
            occupied: queue.len(),
            capacity: self.capacity,
        }
    }

    /// Seat `client` if a chair is free.
    ///
    /// Never waits. The seating and the occupancy report are emitted while the
    /// lock is held, so the reported count matches the mutation.
    pub fn try_admit(&self, client: Client) -> AdmitOutcome {
        let mut queue = self.lock();
        if self.occupancy_of(&queue).is_full() {
            return AdmitOutcome::Rejected(client);
        }

        let id = client.id();
        queue.push_back(client);
        let chair = queue.len();

        self.emitter.emit(Actor::Customer(id), EventKind::Seated { chair });
        self.emitter.emit(
            Actor::Room,
            EventKind::OccupancyChanged(self.occupancy_of(&queue)),
        );

        // 待機中の worker を 1 人だけ起こす（いなければ permit が残る）
        self.available.notify_one();
        AdmitOutcome::Admitted { chair }
    }

    /// Wait for the head of the queue.
    ///
    /// Returns `ShopError::Cancelled` as soon as `cancel` is observed, even if
    /// clients are still waiting. A cancelled call never removes a client.
    pub async fn take_blocking(&self, cancel: &CancellationToken) -> Result<Client, ShopError> {
        loop {
            if cancel.is_cancelled() {
                return Err(ShopError::Cancelled);
            }

            // キューを見る前に waiter として登録しておく。
            // こうしないと「空を確認 → push + notify → 待機開始」で通知を取りこぼす。
            let notified = self.available.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if let Some(client) = self.withdraw() {
                return Ok(client);
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ShopError::Cancelled),
                _ = &mut notified => {}
            }
        }
    }

    fn withdraw(&self) -> Option<Client> {
        let mut queue = self.lock();
        let client = queue.pop_front()?;
        self.emitter.emit(
            Actor::Room,
            EventKind::OccupancyChanged(self.occupancy_of(&queue)),
        );
        Some(client)
    }

    pub fn occupancy(&self) -> Occupancy {
        self.occupancy_of(&self.lock())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
