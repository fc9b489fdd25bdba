//! ServiceTime port - 1 回の施術にかかる時間
//!
//! 施術ごとに新しく引き直す（worker ごとに固定ではない）。

use std::ops::Range;
use std::time::Duration;

use rand::Rng;

/// Produces the duration of the next service.
pub trait ServiceTime: Send + Sync {
    fn next_duration(&self) -> Duration;
}

/// Uniformly distributed over a half-open millisecond range.
#[derive(Debug, Clone)]
pub struct UniformServiceTime {
    range_ms: Range<u64>,
}

impl UniformServiceTime {
    pub fn range_ms(&self) -> &Range<u64> {
        &self.range_ms
    }
}

impl Default for UniformServiceTime {
    /// 100ms 以上 500ms 未満
    fn default() -> Self {
        Self { range_ms: 100..500 }
    }
}

impl ServiceTime for UniformServiceTime {
    fn next_duration(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(self.range_ms.clone());
        Duration::from_millis(ms)
    }
}

/// Every service takes exactly the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedServiceTime(pub Duration);

impl ServiceTime for FixedServiceTime {
    fn next_duration(&self) -> Duration {
        self.0
    }
}
