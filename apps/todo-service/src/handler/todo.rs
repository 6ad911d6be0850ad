//! # Todo ハンドラ
//!
//! ## エンドポイント
//!
//! `/api/todos/{id}` の `{id}` は、GET / POST ではリスト ID、PUT / DELETE では Todo ID。
//!
//! - `GET /api/todos/{list_id}` - リストに属する Todo 一覧
//! - `POST /api/todos/{list_id}` - Todo 作成
//! - `PUT /api/todos/{id}` - 完了状態の更新
//! - `DELETE /api/todos/{id}` - Todo 削除

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
    list::ListId,
    todo::{Todo, TodoId},
};

use crate::{
    error::ServiceError,
    usecase::{ListUseCaseImpl, TodoUseCaseImpl},
};

/// Todo API の共有状態
///
/// 親リストの存在確認のため、リストのユースケースも保持する。
pub struct TodoState {
    pub list_usecase: Arc<ListUseCaseImpl>,
    pub todo_usecase: TodoUseCaseImpl,
}

impl TodoState {
    /// 親リストの存在を確認する（存在しなければ 404）
    async fn ensure_list_exists(&self, list_id: ListId) -> Result<(), ServiceError> {
        match self.list_usecase.get(list_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound {
                entity_type: "List",
                id:          list_id.to_string(),
            }
            .into()),
        }
    }
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub description: Option<String>,
}

/// Todo 更新リクエスト
///
/// `complete` は必須。欠落・型不一致はボディの解釈失敗（400）になる。
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub complete: bool,
}

/// Todo DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TodoDto {
    pub id:          i64,
    pub description: String,
    pub complete:    bool,
}

impl From<Todo> for TodoDto {
    fn from(todo: Todo) -> Self {
        Self {
            id:          todo.id().as_i64(),
            complete:    todo.complete(),
            description: todo.description().clone().into_string(),
        }
    }
}

fn todo_not_found(id: TodoId) -> ServiceError {
    DomainError::NotFound {
        entity_type: "Todo",
        id:          id.to_string(),
    }
    .into()
}

// --- ハンドラ ---

/// GET /api/todos/{list_id}
///
/// ## レスポンス
///
/// - `200 OK`: リストに属する Todo（ID 昇順）
/// - `404 Not Found`: リストが見つからない
#[tracing::instrument(skip_all, fields(list_id = tracing::field::Empty))]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(list_id) = path?;
    tracing::Span::current().record("list_id", list_id);
    let list_id = ListId::from_i64(list_id);

    state.ensure_list_exists(list_id).await?;
    let todos = state.todo_usecase.list_by_parent(list_id).await?;

    let items: Vec<TodoDto> = todos.into_iter().map(TodoDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// POST /api/todos/{list_id}
///
/// ボディの解釈 → リストの存在確認 → 説明の検証の順に行う。
/// 説明が不正でもリストが存在しなければ 404。
///
/// ## レスポンス
///
/// - `201 Created`: 採番された Todo ID（JSON 数値）
/// - `400 Bad Request`: 説明が null・空白のみ、またはボディを解釈できない
/// - `404 Not Found`: リストが見つからない
#[tracing::instrument(skip_all, fields(list_id = tracing::field::Empty))]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(list_id) = path?;
    tracing::Span::current().record("list_id", list_id);
    let list_id = ListId::from_i64(list_id);
    let Json(req) = payload?;

    state.ensure_list_exists(list_id).await?;

    let id = state.todo_usecase.add(req.description, list_id).await?;

    Ok((StatusCode::CREATED, Json(id.as_i64())))
}

/// PUT /api/todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新成功
/// - `400 Bad Request`: ID が整数でない、または `complete` を解釈できない
/// - `404 Not Found`: Todo が見つからない
#[tracing::instrument(skip_all, fields(todo_id = tracing::field::Empty))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = path?;
    tracing::Span::current().record("todo_id", id);
    let id = TodoId::from_i64(id);
    let Json(req) = payload?;

    if !state.todo_usecase.update(id, req.complete).await? {
        return Err(todo_not_found(id));
    }

    Ok(StatusCode::OK)
}

/// DELETE /api/todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 削除成功
/// - `400 Bad Request`: ID が整数でない
/// - `404 Not Found`: Todo が見つからない
#[tracing::instrument(skip_all, fields(todo_id = tracing::field::Empty))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = path?;
    tracing::Span::current().record("todo_id", id);
    let id = TodoId::from_i64(id);

    if !state.todo_usecase.delete(id).await? {
        return Err(todo_not_found(id));
    }

    Ok(StatusCode::OK)
}
