//! # Todo Service
//!
//! リストと Todo を管理する REST API サーバー。
//!
//! ## レイヤー構成
//!
//! ```text
//! handler（HTTP 変換）→ usecase（入力検証・存在判定）→ todo_infra::repository（永続化）
//! ```
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - [`ServiceError`](error::ServiceError) と HTTP レスポンスへの変換
//! - [`handler`] - HTTP ハンドラ
//! - [`usecase`] - ビジネスロジック

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
