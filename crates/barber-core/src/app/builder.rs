//! ShopBuilder - ショップの構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）: 0 人の理容師・0 脚の椅子は build() で弾く
//! - 依存（Clock / EventSink / ServiceTime）の差し替え

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::shop::Shop;
use crate::domain::{ShopError, ShopSpec};
use crate::impls::TracingSink;
use crate::ports::{Clock, Emitter, EventSink, ServiceTime, SystemClock, UniformServiceTime};

/// ShopBuilder は Shop を構築
///
/// # 使用例
/// ```ignore
/// let mut shop = ShopBuilder::new(ShopSpec::new(2, 3))
///     .sink(Arc::new(MemorySink::new()))
///     .build()?;
/// shop.open()?;
/// ```
///
/// # デフォルト
/// - clock: SystemClock
/// - sink: TracingSink（開始マーカーは build() の時刻）
/// - service_time: UniformServiceTime（100ms〜500ms）
pub struct ShopBuilder {
    spec: ShopSpec,
    clock: Arc<dyn Clock>,
    sink: Option<Arc<dyn EventSink>>,
    service_time: Arc<dyn ServiceTime>,
    parent: Option<CancellationToken>,
}

impl ShopBuilder {
    pub fn new(spec: ShopSpec) -> Self {
        Self {
            spec,
            clock: Arc::new(SystemClock),
            sink: None,
            service_time: Arc::new(UniformServiceTime::default()),
            parent: None,
        }
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn service_time(mut self, service_time: Arc<dyn ServiceTime>) -> Self {
        self.service_time = service_time;
        self
    }

    /// Also stop the shop's workers when `token` is cancelled.
    ///
    /// The shop still owns its own token: `close()` never cancels `token`.
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.parent = Some(token);
        self
    }

    /// Validate the spec and wire everything together.
    ///
    /// No task is spawned here; see [`Shop::open`].
    pub fn build(self) -> Result<Shop, ShopError> {
        self.spec.validate()?;

        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(TracingSink::new(self.clock.clone())));
        let emitter = Emitter::new(self.clock, sink);
        let cancel = match self.parent {
            Some(parent) => parent.child_token(),
            None => CancellationToken::new(),
        };

        Shop::assemble(self.spec, emitter, self.service_time, cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RunState;
    use crate::impls::MemorySink;
    use crate::ports::{FixedServiceTime, NoopSink};
    use std::time::Duration;

    #[test]
    fn test_build_success() {
        let shop = ShopBuilder::new(ShopSpec::new(2, 3))
            .sink(Arc::new(NoopSink))
            .build()
            .unwrap();

        let status = shop.status();
        assert_eq!(status.occupancy.capacity, 3);
        assert_eq!(status.workers.len(), 2);
        assert_eq!(status.count(RunState::NotStarted), 2);
        // ID は 1 から順に振られる
        let ids: Vec<u64> = status.workers.iter().map(|w| w.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_build_rejects_zero_barbers() {
        let shop = ShopBuilder::new(ShopSpec::new(0, 3)).build();
        assert!(matches!(
            shop,
            Err(ShopError::InvalidConfiguration {
                field: "barbers",
                value: 0
            })
        ));
    }

    #[test]
    fn test_build_rejects_zero_chairs() {
        let shop = ShopBuilder::new(ShopSpec::new(1, 0)).build();
        assert!(matches!(
            shop,
            Err(ShopError::InvalidConfiguration {
                field: "chairs",
                value: 0
            })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_parent_token_stops_workers() {
        let parent = CancellationToken::new();
        let sink = Arc::new(MemorySink::new());
        let mut shop = ShopBuilder::new(ShopSpec::new(2, 1))
            .sink(sink.clone())
            .service_time(Arc::new(FixedServiceTime(Duration::from_millis(100))))
            .cancel_on(parent.clone())
            .build()
            .unwrap();
        shop.open().unwrap();

        parent.cancel();
        sink.wait_until(|events| {
            events
                .iter()
                .filter(|e| e.kind == crate::domain::EventKind::Stopped)
                .count()
                == 2
        })
        .await;
        assert!(shop.status().all_stopped());
        shop.close().await;
    }

    #[tokio::test]
    async fn test_close_does_not_cancel_parent() {
        let parent = CancellationToken::new();
        let mut shop = ShopBuilder::new(ShopSpec::default())
            .sink(Arc::new(NoopSink))
            .cancel_on(parent.clone())
            .build()
            .unwrap();
        shop.open().unwrap();
        shop.close().await;
        assert!(!parent.is_cancelled());
    }
}
