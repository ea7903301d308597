//! # 台帳トランザクション ID
//!
//! 台帳を更新する操作（登録・保有者変更）ごとに発行する識別子。
//! クライアントへの応答とログの両方に含め、更新の追跡に使う。
//!
//! ## 使用例
//!
//! ```rust
//! use farmtrace_shared::TransactionId;
//!
//! let tx_id = TransactionId::new();
//! tracing::info!(tx_id = %tx_id, "台帳を更新しました");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 台帳更新の一意識別子
///
/// UUID v7 を文字列で保持する。生成順にソート可能なため、
/// ログを時系列で追うときにそのまま並べられる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
   /// 新しいトランザクション ID を生成する
   ///
   /// ```rust
   /// use farmtrace_shared::TransactionId;
   ///
   /// let id = TransactionId::new();
   /// assert!(!id.as_str().is_empty());
   /// ```
   pub fn new() -> Self {
      Self(Uuid::now_v7().to_string())
   }

   /// 既存の文字列からトランザクション ID を復元する
   pub fn from_string(s: impl Into<String>) -> Self {
      Self(s.into())
   }

   /// 内部の文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl Default for TransactionId {
   fn default() -> Self {
      Self::new()
   }
}

impl fmt::Display for TransactionId {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::{assert_eq, assert_ne};

   use super::*;

   #[test]
   fn test_newは毎回異なるidを生成する() {
      let id1 = TransactionId::new();
      let id2 = TransactionId::new();
      assert_ne!(id1, id2);
   }

   #[test]
   fn test_newはuuid形式の文字列を生成する() {
      let id = TransactionId::new();
      assert!(Uuid::parse_str(id.as_str()).is_ok());
   }

   #[test]
   fn test_from_stringは値をそのまま保持する() {
      let id = TransactionId::from_string("tx-123");
      assert_eq!(id.as_str(), "tx-123");
      assert_eq!(format!("{}", id), "tx-123");
   }

   #[test]
   fn test_serializeは素の文字列になる() {
      let id = TransactionId::from_string("tx-456");
      let json = serde_json::to_value(&id).unwrap();
      assert_eq!(json, serde_json::json!("tx-456"));
   }
}
