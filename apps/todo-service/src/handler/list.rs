//! # リストハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/lists` - 全リスト
//! - `POST /api/lists` - リスト作成
//! - `DELETE /api/lists/{id}` - リスト削除（Todo が残っている場合は拒否）

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todo_domain::{
    DomainError,
    list::{List, ListId},
};

use crate::{error::ServiceError, usecase::ListUseCaseImpl};

/// リスト API の共有状態
pub struct ListState {
    pub usecase: Arc<ListUseCaseImpl>,
}

// --- リクエスト/レスポンス型 ---

/// リスト作成リクエスト
///
/// `title` の欠落・`null` はボディの解釈失敗ではなく入力検証エラー（400）として扱う。
#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub title: Option<String>,
}

/// リスト DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListDto {
    pub id:    i64,
    pub title: String,
}

impl From<List> for ListDto {
    fn from(list: List) -> Self {
        Self {
            id:    list.id().as_i64(),
            title: list.title().clone().into_string(),
        }
    }
}

// --- ハンドラ ---

/// GET /api/lists
///
/// 全リストを ID 昇順で返す。
#[tracing::instrument(skip_all)]
pub async fn list_lists(
    State(state): State<Arc<ListState>>,
) -> Result<impl IntoResponse, ServiceError> {
    let lists = state.usecase.list_all().await?;

    let items: Vec<ListDto> = lists.into_iter().map(ListDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// POST /api/lists
///
/// ## レスポンス
///
/// - `201 Created`: 採番されたリスト ID（JSON 数値）
/// - `400 Bad Request`: タイトルが null・空白のみ、またはボディを解釈できない
#[tracing::instrument(skip_all)]
pub async fn create_list(
    State(state): State<Arc<ListState>>,
    payload: Result<Json<CreateListRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Json(req) = payload?;

    let id = state.usecase.add(req.title).await?;

    Ok((StatusCode::CREATED, Json(id.as_i64())))
}

/// DELETE /api/lists/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 削除成功
/// - `400 Bad Request`: ID が整数でない
/// - `404 Not Found`: リストが見つからない
/// - `409 Conflict`: リストに Todo が残っている
#[tracing::instrument(skip_all, fields(list_id = tracing::field::Empty))]
pub async fn delete_list(
    State(state): State<Arc<ListState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = path?;
    tracing::Span::current().record("list_id", id);
    let id = ListId::from_i64(id);

    if !state.usecase.delete(id).await? {
        return Err(DomainError::NotFound {
            entity_type: "List",
            id:          id.to_string(),
        }
        .into());
    }

    Ok(StatusCode::OK)
}
