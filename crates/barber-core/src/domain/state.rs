//! State - 理容師（worker）の状態

use serde::{Deserialize, Serialize};

/// RunState は worker のライフサイクル
///
/// # 状態遷移
/// - NotStarted → Running: `open()` で起動
/// - Running → Stopped: 待機中にキャンセルを観測
///
/// Stopped から Running へ戻ることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    NotStarted,
    Running,
    Stopped,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Stopped)
    }
}

/// Snapshot of the waiting room taken under its lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub occupied: usize,
    pub capacity: usize,
}

impl Occupancy {
    /// Number of free chairs.
    pub fn empty(&self) -> usize {
        self.capacity.saturating_sub(self.occupied)
    }

    pub fn is_full(&self) -> bool {
        self.occupied >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_counts_empty_chairs() {
        let occ = Occupancy {
            occupied: 1,
            capacity: 3,
        };
        assert_eq!(occ.empty(), 2);
        assert!(!occ.is_full());

        let full = Occupancy {
            occupied: 3,
            capacity: 3,
        };
        assert_eq!(full.empty(), 0);
        assert!(full.is_full());
    }

    #[test]
    fn only_stopped_is_terminal() {
        assert!(!RunState::NotStarted.is_terminal());
        assert!(!RunState::Running.is_terminal());
        assert!(RunState::Stopped.is_terminal());
    }
}
