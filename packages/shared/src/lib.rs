//! # FarmTrace 共有ユーティリティ
//!
//! 全クレートから利用される横断的な型と初期化処理。
//!
//! - [`ApiResponse`]: `{ "data": T }` 形式のレスポンスエンベロープ
//! - [`TransactionId`]: 台帳更新ごとに発行するトランザクション識別子
//! - [`observability`]: トレーシング初期化

pub mod api_response;
pub mod observability;
pub mod transaction_id;

pub use api_response::ApiResponse;
pub use transaction_id::TransactionId;
