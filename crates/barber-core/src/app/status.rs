//! Status - ショップの状態スナップショット

use serde::{Deserialize, Serialize};

use crate::domain::{BarberId, Occupancy, RunState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerStatus {
    pub id: BarberId,
    pub state: RunState,
}

/// Point-in-time view of a shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopStatus {
    pub occupancy: Occupancy,
    pub workers: Vec<WorkerStatus>,
}

impl ShopStatus {
    pub fn count(&self, state: RunState) -> usize {
        self.workers.iter().filter(|w| w.state == state).count()
    }

    pub fn all_stopped(&self) -> bool {
        self.workers.iter().all(|w| w.state.is_terminal())
    }
}
