//! # ドメイン層エラー定義
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//!
//! 存在しないレコードや重複キーは台帳（インフラ層）が判定するため、ここには含めない。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 台帳キーが整数でない、フィールド数が足りないなど。
   #[error("バリデーションエラー: {0}")]
   Validation(String),
}
