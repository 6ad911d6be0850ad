//! # Todo ドメイン層
//!
//! リストと Todo のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 永続化済みで ID を持つ [`list::List`], [`todo::Todo`]
//! - **未保存エンティティ**: ID 採番前の [`list::NewList`], [`todo::NewTodo`]
//! - **値オブジェクト**: 検証済みの [`list::ListTitle`], [`todo::TodoDescription`]
//! - **ドメインエラー**: ビジネスルール違反を表現する [`DomainError`]
//!
//! ## 依存関係の方向
//!
//! ```text
//! apps → infra → domain
//!    ↘           ↗
//!       shared
//! ```
//!
//! ドメイン層はインフラ層（DB）に一切依存しない。
//! ID はストレージが採番するため、ドメイン層は ID を生成しない。
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::{DomainError, list::NewList};
//!
//! let list = NewList::new(Some("Groceries".to_string())).unwrap();
//! assert_eq!(list.title().as_str(), "Groceries");
//!
//! let blank = NewList::new(Some("   ".to_string()));
//! assert!(matches!(blank, Err(DomainError::Validation(_))));
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod list;
pub mod text;
pub mod todo;

pub use error::DomainError;
