//! # Observability 基盤
//!
//! ログ出力形式の解釈とトレーシング subscriber の初期化を提供する。
//!
//! 出力形式は `LOG_FORMAT` の値を [`LogFormat`] として設定に取り込み、
//! 不正な値は起動エラーにする。サービス名はリクエストごとのスパン
//! （API 側の `TraceLayer`）に付与するため、ここでは扱わない。

use std::str::FromStr;

use thiserror::Error;

/// `RUST_LOG` 未設定時のフィルタ
///
/// `tower_http` の応答ログ（DEBUG）も含めて出力する。
pub const DEFAULT_FILTER: &str = "info,farmtrace=debug,tower_http=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// JSON 形式（本番環境向け）
   Json,
   /// 人間が読みやすい形式（開発環境向け）
   #[default]
   Pretty,
}

/// 解釈できないログ出力形式
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("不明なログ出力形式です: {0:?}（json / pretty のいずれか）")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
   type Err = UnknownLogFormat;

   fn from_str(s: &str) -> Result<Self, Self::Err> {
      match s {
         "json" => Ok(Self::Json),
         "pretty" => Ok(Self::Pretty),
         other => Err(UnknownLogFormat(other.to_string())),
      }
   }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` があればそれを、なければ [`DEFAULT_FILTER`] を使う。
/// プロセスで一度だけ呼ぶ。
pub fn init_tracing(log_format: LogFormat) {
   use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| DEFAULT_FILTER.into());

   let fmt_layer = match log_format {
      // リクエストスパンの service / method / path を各イベントに含める
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_current_span(true)
         .with_span_list(false)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
   };

   tracing_subscriber::registry()
      .with(env_filter)
      .with(fmt_layer)
      .init();
}
