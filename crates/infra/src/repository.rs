//! # リポジトリ実装
//!
//! リスト・Todo の永続化トレイトと PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **トレイト境界**: ユースケースは `Arc<dyn XxxRepository>` にのみ依存する
//! - **主キー検索と保存のみ**: 業務ルール（存在確認・入力検証）は上位層が担う
//! - **テスタビリティ**: `mock` モジュールのインメモリ実装と差し替え可能

pub mod list_repository;
pub mod todo_repository;

pub use list_repository::{ListRepository, PostgresListRepository};
pub use todo_repository::{PostgresTodoRepository, TodoRepository};
