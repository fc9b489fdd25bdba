//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **TracingSink**: コンソール向け（tracing 経由）
//! - **JsonLinesSink**: 機械可読な JSON lines
//! - **MemorySink**: テスト・検査用

pub mod json_sink;
pub mod memory_sink;
pub mod tracing_sink;

pub use self::json_sink::JsonLinesSink;
pub use self::memory_sink::MemorySink;
pub use self::tracing_sink::TracingSink;
