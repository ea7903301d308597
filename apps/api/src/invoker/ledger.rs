//! # 台帳 Invoker
//!
//! [`ProduceLedger`] を使って [`ProduceInvoker`] を実装する。
//!
//! ## レスポンス
//!
//! | 操作 | 成功時 | 失敗時 |
//! |------|--------|--------|
//! | `get_produce` | 200 `{"data": Produce}` | 400 キー不正 / 404 未登録 |
//! | `add_produce` | 200 `{"data": {"tx_id"}}` | 400 形式不正 / 409 キー重複 |
//! | `get_all_produce` | 200 `{"data": [{"Key", "Record"}]}` | - |
//! | `change_holder` | 200 `{"data": {"tx_id"}}` | 400 形式不正 / 404 未登録 |

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
   Json,
   response::{IntoResponse, Response},
};
use farmtrace_domain::{
   command::{HolderChange, ProduceSubmission},
   produce::{Produce, ProduceKey},
};
use farmtrace_infra::ProduceLedger;
use farmtrace_shared::{ApiResponse, TransactionId};
use serde::{Deserialize, Serialize};

use super::ProduceInvoker;
use crate::error::ApiError;

/// 全件取得の要素
///
/// 台帳の範囲走査結果と同じ `Key` / `Record` 形式で返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntryDto {
   #[serde(rename = "Key")]
   pub key:    String,
   #[serde(rename = "Record")]
   pub record: Produce,
}

/// 更新系操作の受領証
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
   pub tx_id: TransactionId,
}

/// 台帳に対して操作を実行する Invoker
pub struct LedgerInvoker {
   ledger: Arc<dyn ProduceLedger>,
}

impl LedgerInvoker {
   pub fn new(ledger: Arc<dyn ProduceLedger>) -> Self {
      Self { ledger }
   }

   async fn query_produce(&self, id: &str) -> Result<Json<ApiResponse<Produce>>, ApiError> {
      let key = ProduceKey::new(id)?;
      let produce = self
         .ledger
         .find_by_key(&key)
         .await?
         .ok_or_else(|| ApiError::NotFound(format!("Could not locate produce: key={key}")))?;

      Ok(Json(ApiResponse::new(produce)))
   }

   async fn record_produce(
      &self,
      raw: &str,
   ) -> Result<Json<ApiResponse<TransactionReceipt>>, ApiError> {
      let ProduceSubmission { key, produce } = ProduceSubmission::parse(raw)?;

      self.ledger.insert(&key, &produce).await?;

      let tx_id = TransactionId::new();
      tracing::info!(%tx_id, %key, product = %produce.product, "農産物を台帳に登録しました");
      Ok(Json(ApiResponse::new(TransactionReceipt { tx_id })))
   }

   async fn query_all_produce(&self) -> Result<Json<ApiResponse<Vec<LedgerEntryDto>>>, ApiError> {
      let entries = self
         .ledger
         .find_all()
         .await?
         .into_iter()
         .map(|(key, record)| LedgerEntryDto {
            key: key.as_str().to_string(),
            record,
         })
         .collect();

      Ok(Json(ApiResponse::new(entries)))
   }

   async fn change_produce_holder(
      &self,
      raw: &str,
   ) -> Result<Json<ApiResponse<TransactionReceipt>>, ApiError> {
      let HolderChange { key, holder } = HolderChange::parse(raw)?;

      let mut produce = self.ledger.find_by_key(&key).await?.ok_or_else(|| {
         ApiError::NotFound(format!("Could not locate produce record on ledger: key={key}"))
      })?;
      let previous = std::mem::take(&mut produce.holder);
      produce.change_holder(holder);

      self.ledger.update(&key, &produce).await?;

      let tx_id = TransactionId::new();
      tracing::info!(
         %tx_id,
         %key,
         from = %previous,
         to = %produce.holder,
         "保有者を変更しました"
      );
      Ok(Json(ApiResponse::new(TransactionReceipt { tx_id })))
   }
}

#[async_trait]
impl ProduceInvoker for LedgerInvoker {
   #[tracing::instrument(skip(self))]
   async fn get_produce(&self, id: String) -> Response {
      self.query_produce(&id).await.into_response()
   }

   #[tracing::instrument(skip(self))]
   async fn add_produce(&self, produce: String) -> Response {
      self.record_produce(&produce).await.into_response()
   }

   #[tracing::instrument(skip_all)]
   async fn get_all_produce(&self) -> Response {
      self.query_all_produce().await.into_response()
   }

   #[tracing::instrument(skip(self))]
   async fn change_holder(&self, holder: String) -> Response {
      self.change_produce_holder(&holder).await.into_response()
   }
}
