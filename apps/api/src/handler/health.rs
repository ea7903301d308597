//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0"
//! }
//! ```

use axum::Json;
use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
   /// 稼働状態（`"healthy"` 固定）
   pub status:  String,
   /// アプリケーションバージョン（Cargo.toml から取得）
   pub version: String,
}

/// ヘルスチェックエンドポイント
///
/// 台帳の状態は確認せず、プロセスが応答できることだけを返す。常に 200 OK。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse {
      status:  "healthy".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
   })
}

#[cfg(test)]
mod tests {
   use axum::{
      Router,
      body::Body,
      http::{Request, StatusCode},
      routing::get,
   };
   use pretty_assertions::assert_eq;
   use tower::ServiceExt;

   use super::*;

   #[tokio::test]
   async fn test_healthはバージョン付きでhealthyを返す() {
      let sut = Router::new().route("/health", get(health_check));

      let response = sut
         .oneshot(Request::get("/health").body(Body::empty()).unwrap())
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::OK);
      let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
      assert_eq!(body.status, "healthy");
      assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
   }
}
