//! # Invoker（農産物操作の実行者）
//!
//! ルート登録層から呼び出される 4 つの操作を定義する。
//! ルート登録層はパスセグメントを加工せずに渡し、戻り値の [`Response`] をそのまま返す。
//! 入力の検証・台帳操作・レスポンス整形はすべて invoker 側で行う。
//!
//! ```text
//! GET /get_produce/{id}        → get_produce(id)
//! GET /add_produce/{produce}   → add_produce(produce)
//! GET /get_all_produce         → get_all_produce()
//! GET /change_holder/{holder}  → change_holder(holder)
//! ```

pub mod ledger;

use async_trait::async_trait;
use axum::response::Response;

pub use ledger::LedgerInvoker;

/// 農産物操作トレイト
///
/// 本番では [`LedgerInvoker`] を使い、テストでは呼び出しを記録するテストダブルに差し替える。
#[async_trait]
pub trait ProduceInvoker: Send + Sync {
   /// 1 件のレコードを返す
   async fn get_produce(&self, id: String) -> Response;

   /// レコードを登録する
   async fn add_produce(&self, produce: String) -> Response;

   /// 全レコードを返す
   async fn get_all_produce(&self) -> Response;

   /// 保有者を変更する
   async fn change_holder(&self, holder: String) -> Response;
}
