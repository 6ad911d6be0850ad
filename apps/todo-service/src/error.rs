//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | ステータス | ボディ |
//! |--------|-----------|--------|
//! | `Validation` / `BadRequest` | 400 | メッセージ本文（`text/plain`） |
//! | `NotFound` | 404 | [`ErrorResponse`]（RFC 9457 Problem Details） |
//! | `Conflict` | 409 | [`ErrorResponse`] |
//! | `Database` | 500 | [`ErrorResponse`]（固定メッセージ、詳細はログのみ） |

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_domain::DomainError;
use todo_infra::InfraError;
use todo_shared::ErrorResponse;

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 入力値がビジネスルールに違反している
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 現在の状態では操作できない
    #[error("競合エラー: {0}")]
    Conflict(String),

    /// パスやボディを解釈できない
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(_) => ServiceError::Validation(err.reason()),
            DomainError::NotFound { .. } => ServiceError::NotFound(err.reason()),
            DomainError::Conflict(_) => ServiceError::Conflict(err.reason()),
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ServiceError {
    fn from(rejection: PathRejection) -> Self {
        ServiceError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = match self {
            ServiceError::Validation(msg) | ServiceError::BadRequest(msg) => {
                return (StatusCode::BAD_REQUEST, msg).into_response();
            }
            ServiceError::NotFound(msg) => ErrorResponse::not_found(msg),
            ServiceError::Conflict(msg) => ErrorResponse::conflict(msg),
            ServiceError::Database(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
