//! # 台帳更新コマンド
//!
//! 更新系エンドポイントは URL パスセグメント 1 つで入力を受け取る。
//! このモジュールはセグメントをダッシュ区切りで分解し、型付きのコマンドに変換する。
//!
//! ```text
//! /add_produce/{key}-{product}-{weight}-{organic}-{location}-{timestamp}-{holder}
//! /change_holder/{key}-{holder}
//! ```

use crate::{
   DomainError,
   produce::{Produce, ProduceKey},
};

const FIELD_SEPARATOR: char = '-';

/// キーを除いたレコード項目数
const RECORD_FIELDS: usize = 6;

/// 先頭の台帳キーと残りのセグメントに分割する
///
/// キーは符号付き整数なので、先頭の `+` / `-` は区切りとして扱わない。
fn split_leading_key(raw: &str) -> Option<(&str, &str)> {
   let sign_len = usize::from(raw.starts_with(['+', '-']));
   let pos = raw[sign_len..].find(FIELD_SEPARATOR)? + sign_len;
   Some((&raw[..pos], &raw[pos + 1..]))
}

/// 空文字列を拒否する
///
/// 登録・保有者変更の両方で同じ規則を使う。
fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, DomainError> {
   if value.is_empty() {
      return Err(DomainError::Validation(format!("{field} は必須です")));
   }
   Ok(value)
}

/// 農産物の新規登録コマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProduceSubmission {
   pub key:     ProduceKey,
   pub produce: Produce,
}

impl ProduceSubmission {
   /// パスセグメントから登録コマンドを組み立てる
   ///
   /// 先頭の `key` を切り出したあと、先頭から `product`, `weight`, `organic` を、
   /// 末尾から `holder`, `timestamp` を取り出し、残りをすべて `location` とする。
   /// 経度・緯度の負号に含まれるダッシュはそのまま `location` に残る。
   /// `product` と `holder` は空にできない。
   ///
   /// ```rust
   /// use farmtrace_domain::command::ProduceSubmission;
   ///
   /// let cmd = ProduceSubmission::parse("6-Tuna-80.5-true-12.1, -45.2-Sat Jun 1 2019-Ann").unwrap();
   /// assert_eq!(cmd.produce.location, "12.1, -45.2");
   /// assert_eq!(cmd.produce.timestamp, "Sat Jun 1 2019");
   /// ```
   pub fn parse(raw: &str) -> Result<Self, DomainError> {
      let (key, rest) = split_leading_key(raw).unwrap_or((raw, ""));
      let fields: Vec<&str> = rest.split(FIELD_SEPARATOR).collect();
      if rest.is_empty() || fields.len() < RECORD_FIELDS {
         return Err(DomainError::Validation(format!(
            "フィールド数が不足しています（キーと {RECORD_FIELDS} 項目が必要です）: {raw:?}"
         )));
      }

      let last = fields.len();
      let key = ProduceKey::new(key)?;
      let produce = Produce {
         product:   require_non_empty("product", fields[0])?.to_string(),
         weight:    fields[1].to_string(),
         organic:   fields[2].to_string(),
         location:  fields[3..last - 2].join("-"),
         timestamp: fields[last - 2].to_string(),
         holder:    require_non_empty("holder", fields[last - 1])?.to_string(),
      };

      Ok(Self { key, produce })
   }
}

/// 保有者変更コマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderChange {
   pub key:    ProduceKey,
   pub holder: String,
}

impl HolderChange {
   /// パスセグメントから保有者変更コマンドを組み立てる
   ///
   /// キーの直後のダッシュで分割する。保有者名にダッシュが含まれていてもよい。
   pub fn parse(raw: &str) -> Result<Self, DomainError> {
      let (key, holder) = split_leading_key(raw).ok_or_else(|| {
         DomainError::Validation(format!("`キー-保有者` の形式で指定してください: {raw:?}"))
      })?;

      Ok(Self {
         key:    ProduceKey::new(key)?,
         holder: require_non_empty("holder", holder)?.to_string(),
      })
   }
}
