//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `FARM_API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `FARM_API_PORT` | No | `3000` | ポート番号 |
//! | `LEDGER_SEED` | No | `true` | 起動時に台帳へ初期データを投入するか |
//! | `LOG_FORMAT` | No | `pretty` | ログ出力形式（`json` / `pretty`） |
//!
//! `RUST_LOG` はトレーシング初期化時に `EnvFilter` が直接読む。

use std::env;

use farmtrace_shared::observability::LogFormat;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// 値の形式が不正
   #[error("環境変数 {name} の値が不正です: {value:?}")]
   InvalidValue { name: &'static str, value: String },
}

/// HTTP サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
   /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
   pub host: String,
   /// ポート番号
   pub port: u16,
}

/// アプリケーション全体の設定
///
/// 起動時に一度だけ構築する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
   pub server:      ServerConfig,
   /// 台帳に初期データを投入するか
   pub seed_ledger: bool,
   /// ログ出力形式
   pub log_format:  LogFormat,
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   ///
   /// 未設定の項目はデフォルト値を使う。設定されているが解釈できない値はエラーにする。
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// `from_env` の実体。テストではプロセスの環境変数を書き換えずに使う。
   pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
   where
      F: Fn(&'static str) -> Option<String>,
   {
      let host = lookup("FARM_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

      let port = match lookup("FARM_API_PORT") {
         Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
               name: "FARM_API_PORT",
               value,
            })?,
         None => DEFAULT_PORT,
      };

      let seed_ledger = match lookup("LEDGER_SEED") {
         Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidValue {
            name: "LEDGER_SEED",
            value,
         })?,
         None => true,
      };

      let log_format = match lookup("LOG_FORMAT") {
         Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: "LOG_FORMAT",
            value,
         })?,
         None => LogFormat::default(),
      };

      Ok(Self {
         server: ServerConfig { host, port },
         seed_ledger,
         log_format,
      })
   }
}

fn parse_flag(value: &str) -> Option<bool> {
   match value {
      "true" | "1" => Some(true),
      "false" | "0" => Some(false),
      _ => None,
   }
}
