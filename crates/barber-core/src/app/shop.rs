//! Shop - 理容室（ライフサイクルと組み立ての根）
//!
//! - `open()` で全 worker を起動
//! - `try_admit()` で入店を試みる（ブロックしない）
//! - `close()` でキャンセルを送り、全 worker の終了を待つ
//! - close() せずに drop しても worker は止まる（待ち合わせはしない）

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::{CancellationToken, DropGuard};

use super::builder::ShopBuilder;
use super::status::{ShopStatus, WorkerStatus};
use super::worker_loop::{RunningWorker, Worker};
use crate::domain::{Actor, BarberId, Client, EventKind, RunState, ShopError, ShopSpec};
use crate::ports::{Emitter, ServiceTime};
use crate::queue::{AdmitOutcome, WaitingRoom};

/// Admission path into a shop's waiting room.
///
/// Cloneable so that several arrival sources can admit concurrently.
#[derive(Debug, Clone)]
pub struct Admission {
    room: Arc<WaitingRoom>,
    emitter: Emitter,
}

impl Admission {
    /// Try to seat `client`. Returns immediately; a full room rejects.
    pub fn try_admit(&self, client: Client) -> AdmitOutcome {
        let actor = Actor::Customer(client.id());
        self.emitter.emit(actor, EventKind::Arrived);

        let outcome = self.room.try_admit(client);
        if !outcome.is_admitted() {
            self.emitter.emit(actor, EventKind::Left);
        }
        outcome
    }
}

/// Owns the waiting room and a fixed set of workers.
///
/// Dropping the shop cancels its workers without waiting for them.
pub struct Shop {
    spec: ShopSpec,
    admission: Admission,
    cancel: CancellationToken,
    _cancel_on_drop: DropGuard,
    idle: Vec<Worker>,
    running: Vec<RunningWorker>,
    states: Vec<(BarberId, watch::Receiver<RunState>)>,
    opened: bool,
}

impl Shop {
    /// Shop with default clock, tracing sink and 100..500ms service times.
    pub fn new(spec: ShopSpec) -> Result<Self, ShopError> {
        ShopBuilder::new(spec).build()
    }

    pub fn builder(spec: ShopSpec) -> ShopBuilder {
        ShopBuilder::new(spec)
    }

    pub(crate) fn assemble(
        spec: ShopSpec,
        emitter: Emitter,
        service_time: Arc<dyn ServiceTime>,
        cancel: CancellationToken,
    ) -> Result<Self, ShopError> {
        let room = Arc::new(WaitingRoom::new(spec.chairs, emitter.clone())?);

        let idle: Vec<Worker> = (1..=spec.barbers as u64)
            .map(|id| {
                Worker::new(
                    BarberId::new(id),
                    Arc::clone(&room),
                    Arc::clone(&service_time),
                    emitter.clone(),
                    cancel.clone(),
                )
            })
            .collect();
        let states = idle.iter().map(|w| (w.id(), w.subscribe())).collect();

        Ok(Self {
            spec,
            admission: Admission { room, emitter },
            _cancel_on_drop: cancel.clone().drop_guard(),
            cancel,
            idle,
            running: Vec::with_capacity(spec.barbers),
            states,
            opened: false,
        })
    }

    pub fn spec(&self) -> ShopSpec {
        self.spec
    }

    /// Start every worker on the current Tokio runtime.
    pub fn open(&mut self) -> Result<(), ShopError> {
        if self.opened {
            return Err(ShopError::AlreadyOpen);
        }
        self.opened = true;

        self.running.extend(self.idle.drain(..).map(Worker::start));
        tracing::info!(
            barbers = self.spec.barbers,
            chairs = self.spec.chairs,
            "shop opened"
        );
        Ok(())
    }

    pub fn try_admit(&self, client: Client) -> AdmitOutcome {
        self.admission.try_admit(client)
    }

    /// A cloneable admission handle for concurrent arrival sources.
    pub fn admission(&self) -> Admission {
        self.admission.clone()
    }

    pub fn status(&self) -> ShopStatus {
        ShopStatus {
            occupancy: self.admission.room.occupancy(),
            workers: self
                .states
                .iter()
                .map(|(id, rx)| WorkerStatus {
                    id: *id,
                    state: *rx.borrow(),
                })
                .collect(),
        }
    }

    /// Signal cancellation and wait for every worker to stop.
    ///
    /// Services in progress finish first. Clients still seated are dropped.
    pub async fn close(self) {
        self.cancel.cancel();

        for worker in self.running {
            let id = worker.id();
            if let Err(e) = worker.join().await {
                tracing::error!(barber = %id, error = %e, "worker task failed");
            }
        }

        let left_waiting = self.admission.room.len();
        tracing::info!(left_waiting, "shop closed");
    }
}
