//! # FarmTrace API サーバー
//!
//! 農産物台帳を HTTP で公開するサーバーのライブラリ部分。
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐     ┌──────────┐
//! │   Client    │────▶│    routes    │────▶│ LedgerInvoker │────▶│  Ledger  │
//! └─────────────┘     └──────────────┘     └───────────────┘     └──────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - ヘルスチェック
//! - [`invoker`] - 農産物操作のトレイトと台帳実装
//! - [`routes`] - 農産物ルートの登録

pub mod config;
pub mod error;
pub mod handler;
pub mod invoker;
pub mod routes;

use std::sync::Arc;

use axum::{
   Router,
   body::Body,
   http::Request,
   routing::get,
};
use tower_http::trace::TraceLayer;

pub use routes::register_routes;

/// ログ・スパンに付与するサービス名
pub const SERVICE_NAME: &str = "farm-api";

/// サーバー全体のルーターを構築する
///
/// ヘルスチェックに農産物ルートを加え、`TraceLayer` で全リクエストをトレースする。
/// リクエストスパンにはサービス名・メソッド・パスを記録する。
pub fn build_app<I>(invoker: Arc<I>) -> Router
where
   I: invoker::ProduceInvoker + 'static,
{
   let router = Router::new().route("/health", get(handler::health_check));

   let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
      tracing::info_span!(
         "http_request",
         service = SERVICE_NAME,
         method = %request.method(),
         path = %request.uri().path(),
      )
   });

   register_routes(router, invoker).layer(trace_layer)
}
