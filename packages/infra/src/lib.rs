//! # FarmTrace インフラ層
//!
//! 農産物台帳の保存先を抽象化する。
//!
//! - [`ledger`] - 台帳トレイトとインメモリ実装
//! - [`error`] - インフラ層エラー

pub mod error;
pub mod ledger;

pub use error::InfraError;
pub use ledger::{InMemoryProduceLedger, ProduceLedger};
