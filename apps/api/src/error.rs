//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## 設計方針
//!
//! - **RFC 7807 準拠**: Problem Details for HTTP APIs 仕様に従う
//! - **thiserror**: 型安全なエラー定義
//! - **IntoResponse 実装**: axum との統合による自動レスポンス変換
//!
//! ## エラーの階層
//!
//! ```text
//! DomainError / InfraError
//!        ↓ From
//! ApiError
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + JSON)
//! ```
//!
//! ルート登録層はこのエラーを扱わない。変換するのは invoker の責務。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use farmtrace_domain::DomainError;
use farmtrace_infra::InfraError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない（404 Not Found）
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// バリデーションエラー（400 Bad Request）
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// 競合エラー（409 Conflict）
   #[error("リソースが競合しています: {0}")]
   Conflict(String),
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(msg) => ApiError::Validation(msg),
      }
   }
}

impl From<InfraError> for ApiError {
   fn from(err: InfraError) -> Self {
      match &err {
         InfraError::Conflict { .. } => ApiError::Conflict(err.to_string()),
         InfraError::NotFound { .. } => ApiError::NotFound(err.to_string()),
      }
   }
}

/// RFC 7807 準拠のエラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
   /// エラーの種類を識別する URI
   #[serde(rename = "type")]
   pub error_type: String,
   /// エラーの概要
   pub title:      String,
   /// HTTP ステータスコード
   pub status:     u16,
   /// エラーの詳細情報（オプション）
   #[serde(skip_serializing_if = "Option::is_none")]
   pub detail:     Option<String>,
}

impl IntoResponse for ApiError {
   /// | ApiError | HTTP Status |
   /// |----------|-------------|
   /// | Validation | 400 |
   /// | NotFound | 404 |
   /// | Conflict | 409 |
   fn into_response(self) -> Response {
      let (status, title, detail) = match self {
         ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "バリデーションエラー", Some(msg)),
         ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "リソースが見つかりません", Some(msg)),
         ApiError::Conflict(msg) => (StatusCode::CONFLICT, "リソースの競合", Some(msg)),
      };

      let body = ErrorResponse {
         error_type: "about:blank".to_string(),
         title: title.to_string(),
         status: status.as_u16(),
         detail,
      };

      (status, Json(body)).into_response()
   }
}
