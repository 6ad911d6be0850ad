//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックはユースケースに委譲
//! - パス・ボディの抽出失敗は `Result<_, Rejection>` で受け取り、
//!   [`ServiceError::BadRequest`](crate::error::ServiceError::BadRequest) に変換する

pub mod health;
pub mod list;
pub mod todo;

pub use health::{ReadinessState, health_check, readiness_check};
pub use list::{ListState, create_list, delete_list, list_lists};
pub use todo::{TodoState, create_todo, delete_todo, list_todos, update_todo};
