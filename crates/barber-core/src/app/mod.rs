//! App - アプリケーション層
//!
//! ports と queue を組み合わせてショップを組み立てる。
//!
//! # 主要コンポーネント
//! - **ShopBuilder**: 構築とワイヤリング（Fail-fast な設定検証）
//! - **Shop**: ライフサイクル（open / try_admit / close）
//! - **Worker**: 理容師の仕事ループ
//! - **ShopStatus**: 状態スナップショット

pub mod builder;
pub mod shop;
pub mod status;
pub mod worker_loop;

// 主要な型を再エクスポート
pub use self::builder::ShopBuilder;
pub use self::shop::{Admission, Shop};
pub use self::status::{ShopStatus, WorkerStatus};
pub use self::worker_loop::{RunningWorker, Worker};
