//! Ports - 抽象化レイヤー
//!
//! コアが外部（時計・ログ出力・乱数による施術時間）に依存する箇所を
//! trait として切り出す。実装の差し替えでテストを決定的にできる。

pub mod clock;
pub mod event_sink;
pub mod service_time;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::{Emitter, EventSink, NoopSink};
pub use self::service_time::{FixedServiceTime, ServiceTime, UniformServiceTime};
