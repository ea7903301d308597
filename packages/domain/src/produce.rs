//! # 農産物レコード
//!
//! 台帳に記録される農産物と、その台帳キーを定義する。
//!
//! 各フィールドは台帳上の表現をそのまま文字列で保持する。
//! 重量や有機栽培フラグを数値・真偽値に変換するのは表示側の責務とする。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 台帳キー
///
/// 10 進の符号付き 64bit 整数として解釈できる文字列のみ受け付ける。
/// 元の文字列は正規化せずに保持するため、`"007"` と `"7"` は別のキーになる。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProduceKey(String);

impl ProduceKey {
   /// 文字列から台帳キーを作成する
   ///
   /// ```rust
   /// use farmtrace_domain::produce::ProduceKey;
   ///
   /// assert!(ProduceKey::new("42").is_ok());
   /// assert!(ProduceKey::new("apple").is_err());
   /// ```
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();
      if value.parse::<i64>().is_err() {
         return Err(DomainError::Validation(format!(
            "台帳キーは整数である必要があります: {value:?}"
         )));
      }
      Ok(Self(value))
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl fmt::Display for ProduceKey {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

/// 農産物レコード
///
/// JSON では `product`, `weight`, `organic`, `location`, `timestamp`, `holder`
/// のキーでシリアライズされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Produce {
   /// 品目（例: `Chicken`）
   pub product:   String,
   /// 重量（例: `1400.00`）
   pub weight:    String,
   /// 有機栽培か（`true` / `false`）
   pub organic:   String,
   /// 緯度・経度（例: `67.0006, -70.5476`）
   pub location:  String,
   /// 記録日時（クライアントが送った表記のまま）
   pub timestamp: String,
   /// 現在の保有者
   pub holder:    String,
}

impl Produce {
   /// 保有者を変更する
   ///
   /// 同じ保有者への変更も許可する。
   pub fn change_holder(&mut self, holder: impl Into<String>) {
      self.holder = holder.into();
   }
}

/// 台帳の初期データ
///
/// キー `1`〜`5` に割り当てる 5 件のレコードを返す。
pub fn genesis_records() -> Vec<(ProduceKey, Produce)> {
   let rows = [
      (
         "Chicken",
         "1400.00",
         "true",
         "67.0006, -70.5476",
         "Fri Jun 22 2018 11:02:01 GMT+0530 (India Standard Time)",
         "Sakya",
      ),
      (
         "Beef",
         "1000.00",
         "false",
         "91.2395, -49.4594",
         "Fri Jan 11 2019 12:01:01 GMT+0800 (Singapore Standard Time)",
         "Ilya",
      ),
      (
         "Pork",
         "1200.00",
         "false",
         "58.0148, 59.01391",
         "Fri Jan 11 2019 12:05:21 GMT+0800 (Singapore Standard Time)",
         "Dan",
      ),
      (
         "Salmon",
         "1500.00",
         "true",
         "-45.0945, 0.7949",
         "Wed Mar 13 2019 10:05:01 GMT+0800 (Singapore Standard Time)",
         "George",
      ),
      (
         "Salmon",
         "2400.00",
         "true",
         "-107.6043, 19.5003",
         "Fri Mar 15 2019 20:00:01 GMT+0800 (Singapore Standard Time)",
         "John",
      ),
   ];

   rows
      .into_iter()
      .enumerate()
      .map(
         |(i, (product, weight, organic, location, timestamp, holder))| {
            (
               // 整数文字列なので検証済みとして直接構築する
               ProduceKey((i + 1).to_string()),
               Produce {
                  product:   product.to_string(),
                  weight:    weight.to_string(),
                  organic:   organic.to_string(),
                  location:  location.to_string(),
                  timestamp: timestamp.to_string(),
                  holder:    holder.to_string(),
               },
            )
         },
      )
      .collect()
}
