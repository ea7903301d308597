//! # 農産物台帳
//!
//! キーと農産物レコードの対応を保持する台帳。
//!
//! ## 設計方針
//!
//! - **トレイトで抽象化**: 呼び出し側は [`ProduceLedger`] のみに依存する
//! - **キー順の走査**: 全件取得はキーの辞書順で返す
//! - **重複登録の排他**: 存在確認と書き込みを同一ロック内で行う

use std::collections::BTreeMap;

use async_trait::async_trait;
use farmtrace_domain::produce::{Produce, ProduceKey, genesis_records};
use tokio::sync::RwLock;

use crate::InfraError;

const ENTITY: &str = "Produce";

/// 農産物台帳トレイト
#[async_trait]
pub trait ProduceLedger: Send + Sync {
   /// キーでレコードを取得する
   async fn find_by_key(&self, key: &ProduceKey) -> Result<Option<Produce>, InfraError>;

   /// 全レコードをキーの辞書順で取得する
   async fn find_all(&self) -> Result<Vec<(ProduceKey, Produce)>, InfraError>;

   /// 新しいレコードを登録する
   ///
   /// 既に同じキーが存在する場合は [`InfraError::Conflict`] を返す。
   async fn insert(&self, key: &ProduceKey, produce: &Produce) -> Result<(), InfraError>;

   /// 既存のレコードを置き換える
   ///
   /// キーが存在しない場合は [`InfraError::NotFound`] を返す。
   async fn update(&self, key: &ProduceKey, produce: &Produce) -> Result<(), InfraError>;
}

/// インメモリ台帳
///
/// プロセスの生存期間だけレコードを保持する。
#[derive(Debug, Default)]
pub struct InMemoryProduceLedger {
   records: RwLock<BTreeMap<ProduceKey, Produce>>,
}

impl InMemoryProduceLedger {
   /// 空の台帳を作成する
   pub fn new() -> Self {
      Self::default()
   }

   /// 初期データ（キー `1`〜`5`）を投入した台帳を作成する
   pub fn with_genesis() -> Self {
      let records: BTreeMap<_, _> = genesis_records().into_iter().collect();
      tracing::debug!(count = records.len(), "台帳に初期データを投入しました");
      Self {
         records: RwLock::new(records),
      }
   }
}

#[async_trait]
impl ProduceLedger for InMemoryProduceLedger {
   async fn find_by_key(&self, key: &ProduceKey) -> Result<Option<Produce>, InfraError> {
      Ok(self.records.read().await.get(key).cloned())
   }

   async fn find_all(&self) -> Result<Vec<(ProduceKey, Produce)>, InfraError> {
      Ok(self
         .records
         .read()
         .await
         .iter()
         .map(|(k, v)| (k.clone(), v.clone()))
         .collect())
   }

   async fn insert(&self, key: &ProduceKey, produce: &Produce) -> Result<(), InfraError> {
      let mut records = self.records.write().await;
      if records.contains_key(key) {
         return Err(InfraError::conflict(ENTITY, key.as_str()));
      }
      records.insert(key.clone(), produce.clone());
      Ok(())
   }

   async fn update(&self, key: &ProduceKey, produce: &Produce) -> Result<(), InfraError> {
      let mut records = self.records.write().await;
      let slot = records
         .get_mut(key)
         .ok_or_else(|| InfraError::not_found(ENTITY, key.as_str()))?;
      *slot = produce.clone();
      Ok(())
   }
}
