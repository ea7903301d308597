//! # API レスポンスエンベロープ
//!
//! 公開 API の統一レスポンス形式 `{ "data": T }` を提供する。

use serde::{Deserialize, Serialize};

/// 公開 API の統一レスポンス型
///
/// 成功レスポンスはすべて `{ "data": T }` 形式で返す。
/// エラーレスポンスは RFC 7807 形式で別に定義している。
///
/// ## 使用例
///
/// ```
/// use farmtrace_shared::ApiResponse;
///
/// let response = ApiResponse::new("hello");
/// assert_eq!(response.data, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
   pub data: T,
}

impl<T> ApiResponse<T> {
   /// 新しい `ApiResponse` を作成する
   pub fn new(data: T) -> Self {
      Self { data }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_serializeでdataキーに包まれる() {
      let response = ApiResponse::new("hello");
      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(json, serde_json::json!({ "data": "hello" }));
   }

   #[test]
   fn test_vecペイロードは配列としてシリアライズされる() {
      let response = ApiResponse::new(vec!["1", "2"]);
      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(json, serde_json::json!({ "data": ["1", "2"] }));
   }

   #[test]
   fn test_deserializeでjsonからオブジェクトに変換する() {
      let json = r#"{"data": 42}"#;
      let response: ApiResponse<i32> = serde_json::from_str(json).unwrap();

      assert_eq!(response.data, 42);
   }
}
