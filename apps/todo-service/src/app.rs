//! # ルーター構築
//!
//! リポジトリ → ユースケース → State → Router の順に組み立てる。
//!
//! ## ミドルウェアの順序（外側から）
//!
//! ```text
//! SetRequestId → PropagateRequestId → TraceLayer → CanonicalLogLine → CORS → handler
//! ```

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};
use sqlx::PgPool;
use todo_infra::repository::{ListRepository, TodoRepository};
use todo_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        ListState,
        ReadinessState,
        TodoState,
        create_list,
        create_todo,
        delete_list,
        delete_todo,
        health_check,
        list_lists,
        list_todos,
        readiness_check,
        update_todo,
    },
    usecase::{ListUseCaseImpl, TodoUseCaseImpl},
};

/// アプリケーションのルーターを構築する
///
/// | Method | Path | Handler |
/// |--------|------|---------|
/// | GET | `/health` | [`health_check`] |
/// | GET | `/health/ready` | [`readiness_check`] |
/// | GET / POST | `/api/lists` | [`list_lists`] / [`create_list`] |
/// | DELETE | `/api/lists/{id}` | [`delete_list`] |
/// | GET / POST | `/api/todos/{list_id}` | [`list_todos`] / [`create_todo`] |
/// | PUT / DELETE | `/api/todos/{id}` | [`update_todo`] / [`delete_todo`] |
///
/// `/api/todos/{...}` は 1 つのパスパターンを共有し、メソッドによって
/// パラメータの意味（リスト ID / Todo ID）が変わる。
pub fn build_router(
    list_repository: Arc<dyn ListRepository>,
    todo_repository: Arc<dyn TodoRepository>,
    pool: PgPool,
) -> Router {
    let list_usecase = Arc::new(ListUseCaseImpl::new(
        list_repository,
        todo_repository.clone(),
    ));
    let todo_usecase = TodoUseCaseImpl::new(todo_repository);

    let readiness_state = Arc::new(ReadinessState { pool });
    let list_state = Arc::new(ListState {
        usecase: list_usecase.clone(),
    });
    let todo_state = Arc::new(TodoState {
        list_usecase,
        todo_usecase,
    });

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(
            Router::new()
                .route("/api/lists", get(list_lists).post(create_list))
                .route("/api/lists/{id}", delete(delete_list))
                .with_state(list_state),
        )
        .merge(
            Router::new()
                .route(
                    "/api/todos/{id}",
                    get(list_todos)
                        .post(create_todo)
                        .put(update_todo)
                        .delete(delete_todo),
                )
                .with_state(todo_state),
        )
        .layer(CorsLayer::permissive())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
