//! # FarmTrace ドメイン層
//!
//! 農産物（produce）台帳のドメインモデルとビジネスルール。
//!
//! ## モジュール構成
//!
//! - [`produce`] - 農産物レコードと台帳キー、初期データ
//! - [`command`] - URL パスセグメントから組み立てる更新コマンド
//! - [`error`] - ドメインエラー

pub mod command;
pub mod error;
pub mod produce;

pub use error::DomainError;
