//! # HTTP リクエストハンドラ
//!
//! 農産物ルート以外のハンドラを置く。農産物ルートは [`crate::routes`] が登録する。

pub mod health;

pub use health::health_check;
