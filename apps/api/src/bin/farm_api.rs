//! # FarmTrace API サーバー
//!
//! 農産物台帳を公開する HTTP サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|------------|------|
//! | `FARM_API_HOST` | `0.0.0.0` | バインドアドレス |
//! | `FARM_API_PORT` | `3000` | ポート番号 |
//! | `LEDGER_SEED` | `true` | 初期データを投入するか |
//! | `LOG_FORMAT` | `pretty` | `json` / `pretty` |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run --bin farm-api
//!
//! curl http://localhost:3000/get_all_produce
//! curl http://localhost:3000/change_holder/1-Alice
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use farmtrace_api::{SERVICE_NAME, build_app, config::AppConfig, invoker::LedgerInvoker};
use farmtrace_infra::{InMemoryProduceLedger, ProduceLedger};
use farmtrace_shared::observability::init_tracing;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // ログ出力形式も設定に含まれるため、設定エラーは stderr にのみ出る
   let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

   init_tracing(config.log_format);

   tracing::info!(
      service = SERVICE_NAME,
      seed_ledger = config.seed_ledger,
      "FarmTrace API サーバーを起動します: {}:{}",
      config.server.host,
      config.server.port
   );

   let ledger: Arc<dyn ProduceLedger> = if config.seed_ledger {
      Arc::new(InMemoryProduceLedger::with_genesis())
   } else {
      Arc::new(InMemoryProduceLedger::new())
   };
   let invoker = Arc::new(LedgerInvoker::new(ledger));

   let app = build_app(invoker);

   let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
      .parse()
      .context("アドレスのパースに失敗しました")?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("FarmTrace API サーバーが起動しました: {}", addr);

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   Ok(())
}

/// Ctrl+C を待つ
///
/// シグナルハンドラを登録できない場合はシャットダウンせずに稼働を続ける。
async fn shutdown_signal() {
   if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!("シグナルハンドラの登録に失敗しました: {}", e);
      std::future::pending::<()>().await;
   }
   tracing::info!("シャットダウンします");
}
