//! # インフラ層エラー定義
//!
//! 台帳操作で発生するエラーを表現する。
//! API 層でエラー種別に応じた HTTP ステータスに変換する。

use thiserror::Error;

/// インフラ層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfraError {
   /// 同じキーのエンティティが既に存在する
   #[error("{entity} は既に存在します: key={key}")]
   Conflict {
      /// エンティティ名（例: "Produce"）
      entity: &'static str,
      key:    String,
   },

   /// 更新対象のエンティティが存在しない
   #[error("{entity} が見つかりません: key={key}")]
   NotFound {
      entity: &'static str,
      key:    String,
   },
}

impl InfraError {
   pub fn conflict(entity: &'static str, key: impl Into<String>) -> Self {
      Self::Conflict {
         entity,
         key: key.into(),
      }
   }

   pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
      Self::NotFound {
         entity,
         key: key.into(),
      }
   }
}
