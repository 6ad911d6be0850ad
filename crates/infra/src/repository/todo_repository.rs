//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! 親リストの存在確認は行わない。呼び出し側のユースケースが事前に確認する
//! （存在しない `list_id` での挿入は外部キー制約違反として `InfraError` になる）。

use async_trait::async_trait;
use sqlx::PgPool;
use todo_domain::{
    list::ListId,
    todo::{NewTodo, Todo, TodoId},
};

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 全 Todo を ID 昇順で取得する
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError>;

    /// 指定リストに属する Todo を ID 昇順で取得する
    async fn find_by_list_id(&self, list_id: &ListId) -> Result<Vec<Todo>, InfraError>;

    /// Todo を挿入し、採番された ID 付きの Todo を返す
    async fn insert(&self, todo: &NewTodo) -> Result<Todo, InfraError>;

    /// Todo を更新する
    ///
    /// 更新対象は `complete` のみ。説明文と所属リストは変更しない。
    async fn update(&self, todo: &Todo) -> Result<(), InfraError>;

    /// Todo を削除する
    ///
    /// 対象が存在した場合は `true`、存在しなかった場合は `false`。
    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `todo` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    todo_id:     i64,
    description: String,
    complete:    bool,
    list_id:     i64,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo::from_db(
            TodoId::from_i64(row.todo_id),
            row.description,
            row.complete,
            ListId::from_i64(row.list_id),
        )
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT todo_id, description, complete, list_id
            FROM todo
            ORDER BY todo_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT todo_id, description, complete, list_id
            FROM todo
            WHERE todo_id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%list_id))]
    async fn find_by_list_id(&self, list_id: &ListId) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT todo_id, description, complete, list_id
            FROM todo
            WHERE list_id = $1
            ORDER BY todo_id
            "#,
        )
        .bind(list_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(list_id = %todo.list_id()))]
    async fn insert(&self, todo: &NewTodo) -> Result<Todo, InfraError> {
        let todo_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO todo (description, complete, list_id)
            VALUES ($1, $2, $3)
            RETURNING todo_id
            "#,
        )
        .bind(todo.description().as_str())
        .bind(todo.complete())
        .bind(todo.list_id().as_i64())
        .fetch_one(&self.pool)
        .await?;

        Ok(todo.clone().into_todo(TodoId::from_i64(todo_id)))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %todo.id()))]
    async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            UPDATE todo
            SET complete = $2
            WHERE todo_id = $1
            "#,
        )
        .bind(todo.id().as_i64())
        .bind(todo.complete())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM todo WHERE todo_id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
