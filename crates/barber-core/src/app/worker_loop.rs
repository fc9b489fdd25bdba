//! WorkerLoop - 理容師の仕事ループ
//!
//! # フロー
//! 1. WaitingRoom::take_blocking() で客を待つ（ここが唯一の待機点）
//! 2. ServiceTime から施術時間を引いて sleep
//! 3. 完了を報告して 1 に戻る
//!
//! キャンセルは 1 の待機点でしか観測しないので、施術の途中で止まることはない。

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::domain::{Actor, BarberId, EventKind, RunState, ShopError};
use crate::ports::{Emitter, ServiceTime};
use crate::queue::WaitingRoom;

/// A barber that has not been started yet.
pub struct Worker {
    id: BarberId,
    room: Arc<WaitingRoom>,
    service_time: Arc<dyn ServiceTime>,
    emitter: Emitter,
    cancel: CancellationToken,
    state: watch::Sender<RunState>,
}

impl Worker {
    pub fn new(
        id: BarberId,
        room: Arc<WaitingRoom>,
        service_time: Arc<dyn ServiceTime>,
        emitter: Emitter,
        cancel: CancellationToken,
    ) -> Self {
        let (state, _) = watch::channel(RunState::NotStarted);
        Self {
            id,
            room,
            service_time,
            emitter,
            cancel,
            state,
        }
    }

    pub fn id(&self) -> BarberId {
        self.id
    }

    /// Follow this worker's run state.
    pub fn subscribe(&self) -> watch::Receiver<RunState> {
        self.state.subscribe()
    }

    /// Spawn the loop on the current Tokio runtime.
    ///
    /// Consumes the worker, so it can only be started once.
    pub fn start(self) -> RunningWorker {
        let id = self.id;
        self.state.send_replace(RunState::Running);
        let join = tokio::spawn(self.run());
        RunningWorker { id, join }
    }

    async fn run(self) {
        let actor = Actor::Barber(self.id);
        self.emitter.emit(actor, EventKind::Started);

        loop {
            self.emitter.emit(actor, EventKind::Sleeping);

            let client = match self.room.take_blocking(&self.cancel).await {
                Ok(client) => client,
                Err(ShopError::Cancelled) => break,
                Err(e) => {
                    tracing::warn!(barber = %self.id, error = %e, "unexpected error while waiting");
                    break;
                }
            };

            self.emitter.emit(
                Actor::Customer(client.id()),
                EventKind::WokeUp { barber: self.id },
            );
            self.emitter.emit(
                actor,
                EventKind::TookForService {
                    client: client.id(),
                },
            );

            let duration = self.service_time.next_duration();
            tokio::time::sleep(duration).await;

            self.emitter.emit(
                actor,
                EventKind::ServiceCompleted {
                    client: client.id(),
                    duration_ms: duration.as_millis() as u64,
                },
            );
        }

        self.state.send_replace(RunState::Stopped);
        self.emitter.emit(actor, EventKind::Stopped);
        tracing::debug!(barber = %self.id, "worker loop exited");
    }
}

/// Handle to a spawned worker.
pub struct RunningWorker {
    id: BarberId,
    join: JoinHandle<()>,
}

impl RunningWorker {
    pub fn id(&self) -> BarberId {
        self.id
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the loop to exit. It only exits after cancellation.
    pub async fn join(self) -> Result<(), JoinError> {
        self.join.await
    }
}
