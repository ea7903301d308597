//! # 農産物ルート登録
//!
//! 4 つの GET エンドポイントを [`ProduceInvoker`] の操作に結び付ける。
//!
//! ## エンドポイント
//!
//! - `GET /get_produce/{id}` - 1 件取得
//! - `GET /add_produce/{produce}` - 登録
//! - `GET /get_all_produce` - 全件取得
//! - `GET /change_holder/{holder}` - 保有者変更
//!
//! ハンドラはパスセグメントを加工せずに invoker へ渡し、戻り値をそのまま返す。
//! 検証もエラー変換もここでは行わない。

use std::sync::Arc;

use axum::{
   Router,
   extract::{Path, State},
   response::Response,
   routing::get,
};

use crate::invoker::ProduceInvoker;

/// 農産物ルートを `router` に登録する
///
/// invoker は引数で受け取るため、テストではテストダブルに差し替えられる。
/// 1 回の呼び出しで 4 ルートすべてが登録される。
///
/// ```rust,ignore
/// let ledger = Arc::new(InMemoryProduceLedger::with_genesis());
/// let invoker = Arc::new(LedgerInvoker::new(ledger));
/// let app = register_routes(Router::new(), invoker);
/// ```
pub fn register_routes<I>(router: Router, invoker: Arc<I>) -> Router
where
   I: ProduceInvoker + 'static,
{
   let produce_routes = Router::new()
      .route("/get_produce/{id}", get(get_produce::<I>))
      .route("/add_produce/{produce}", get(add_produce::<I>))
      .route("/get_all_produce", get(get_all_produce::<I>))
      .route("/change_holder/{holder}", get(change_holder::<I>))
      .with_state(invoker);

   router.merge(produce_routes)
}

async fn get_produce<I: ProduceInvoker>(
   State(invoker): State<Arc<I>>,
   Path(id): Path<String>,
) -> Response {
   invoker.get_produce(id).await
}

async fn add_produce<I: ProduceInvoker>(
   State(invoker): State<Arc<I>>,
   Path(produce): Path<String>,
) -> Response {
   invoker.add_produce(produce).await
}

async fn get_all_produce<I: ProduceInvoker>(State(invoker): State<Arc<I>>) -> Response {
   invoker.get_all_produce().await
}

async fn change_holder<I: ProduceInvoker>(
   State(invoker): State<Arc<I>>,
   Path(holder): Path<String>,
) -> Response {
   invoker.change_holder(holder).await
}

#[cfg(test)]
mod tests {
   use std::sync::Mutex;

   use async_trait::async_trait;
   use axum::{
      body::Body,
      http::{Method, Request, StatusCode},
      response::IntoResponse,
   };
   use pretty_assertions::assert_eq;
   use rstest::rstest;
   use tower::ServiceExt;

   use super::*;

   // --- テストダブル ---

   #[derive(Debug, Clone, PartialEq, Eq)]
   enum Call {
      GetProduce(String),
      AddProduce(String),
      GetAllProduce,
      ChangeHolder(String),
   }

   #[derive(Default)]
   struct RecordingInvoker {
      calls: Mutex<Vec<Call>>,
   }

   impl RecordingInvoker {
      fn record(&self, call: Call) -> Response {
         self.calls.lock().unwrap().push(call);
         (StatusCode::IM_A_TEAPOT, "recorded").into_response()
      }

      fn calls(&self) -> Vec<Call> {
         self.calls.lock().unwrap().clone()
      }
   }

   #[async_trait]
   impl ProduceInvoker for RecordingInvoker {
      async fn get_produce(&self, id: String) -> Response {
         self.record(Call::GetProduce(id))
      }

      async fn add_produce(&self, produce: String) -> Response {
         self.record(Call::AddProduce(produce))
      }

      async fn get_all_produce(&self) -> Response {
         self.record(Call::GetAllProduce)
      }

      async fn change_holder(&self, holder: String) -> Response {
         self.record(Call::ChangeHolder(holder))
      }
   }

   // --- ヘルパー ---

   fn create_test_app() -> (Router, Arc<RecordingInvoker>) {
      let invoker = Arc::new(RecordingInvoker::default());
      let app = register_routes(Router::new(), invoker.clone());
      (app, invoker)
   }

   fn get_request(uri: &str) -> Request<Body> {
      Request::builder()
         .method(Method::GET)
         .uri(uri)
         .body(Body::empty())
         .unwrap()
   }

   // --- テストケース ---

   #[rstest]
   #[case("/get_produce/42", Call::GetProduce("42".to_string()))]
   #[case("/add_produce/apple", Call::AddProduce("apple".to_string()))]
   #[case("/get_all_produce", Call::GetAllProduce)]
   #[case("/change_holder/alice", Call::ChangeHolder("alice".to_string()))]
   #[tokio::test]
   async fn test_各ルートは対応する操作を1回だけ呼ぶ(#[case] uri: &str, #[case] expected: Call) {
      // Given
      let (sut, invoker) = create_test_app();

      // When
      let response = sut.oneshot(get_request(uri)).await.unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
      assert_eq!(invoker.calls(), vec![expected]);
   }

   #[tokio::test]
   async fn test_invokerのレスポンスをそのまま返す() {
      let (sut, _) = create_test_app();

      let response = sut.oneshot(get_request("/get_produce/1")).await.unwrap();

      assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
      let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      assert_eq!(&bytes[..], b"recorded");
   }

   #[tokio::test]
   async fn test_パスパラメータは検証せずに渡す() {
      let (sut, invoker) = create_test_app();

      let response = sut
         .oneshot(get_request("/get_produce/not-a-number"))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
      assert_eq!(
         invoker.calls(),
         vec![Call::GetProduce("not-a-number".to_string())]
      );
   }

   #[tokio::test]
   async fn test_パーセントエンコードはデコードして渡す() {
      let (sut, invoker) = create_test_app();

      sut.oneshot(get_request(
         "/add_produce/6-Beef-1000.00-false-91.2395,%20-49.4594-Fri%20Jan%2011-Ilya",
      ))
      .await
      .unwrap();

      assert_eq!(
         invoker.calls(),
         vec![Call::AddProduce(
            "6-Beef-1000.00-false-91.2395, -49.4594-Fri Jan 11-Ilya".to_string()
         )]
      );
   }

   #[rstest]
   #[case("/get_produce")]
   #[case("/get_produce/1/extra")]
   #[case("/unknown")]
   #[tokio::test]
   async fn test_一致しないパスではinvokerを呼ばない(#[case] uri: &str) {
      let (sut, invoker) = create_test_app();

      let response = sut.oneshot(get_request(uri)).await.unwrap();

      assert_eq!(response.status(), StatusCode::NOT_FOUND);
      assert!(invoker.calls().is_empty());
   }

   #[tokio::test]
   async fn test_get以外のメソッドではinvokerを呼ばない() {
      let (sut, invoker) = create_test_app();

      let request = Request::builder()
         .method(Method::POST)
         .uri("/get_all_produce")
         .body(Body::empty())
         .unwrap();
      let response = sut.oneshot(request).await.unwrap();

      assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
      assert!(invoker.calls().is_empty());
   }

   #[tokio::test]
   async fn test_既存ルートを保持したまま登録する() {
      let invoker = Arc::new(RecordingInvoker::default());
      let base = Router::new().route("/ping", get(|| async { "pong" }));
      let sut = register_routes(base, invoker.clone());

      let response = sut.oneshot(get_request("/ping")).await.unwrap();

      assert_eq!(response.status(), StatusCode::OK);
      assert!(invoker.calls().is_empty());
   }
}
