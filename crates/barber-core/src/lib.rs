//! barber-core
//!
//! Core building blocks for the sleeping-barber simulation.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, client, spec, state, events, errors）
//! - **ports**: 抽象化レイヤー（Clock, EventSink, ServiceTime）
//! - **queue**: 待合室（容量付き FIFO + blocking withdrawal）
//! - **app**: worker ループ・ショップのライフサイクル・builder
//! - **impls**: ports の実装（TracingSink, JsonLinesSink, MemorySink）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod queue;

pub use app::{Admission, Shop, ShopBuilder, ShopStatus};
pub use domain::{Client, ClientId, ShopError, ShopSpec};
pub use queue::AdmitOutcome;
