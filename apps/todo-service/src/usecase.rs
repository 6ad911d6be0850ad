//! # ユースケース層
//!
//! Todo Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: 入力検証と存在判定はユースケースに集約
//!
//! ## モジュール構成
//!
//! - `list`: リストの一覧・作成・取得・削除
//! - `todo`: Todo の一覧・作成・完了状態更新・削除

pub mod list;
pub mod todo;

pub use list::ListUseCaseImpl;
pub use todo::TodoUseCaseImpl;
