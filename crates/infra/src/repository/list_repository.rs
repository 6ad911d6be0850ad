//! # ListRepository
//!
//! リストの永続化を担当するリポジトリ。
//!
//! `todo.list_id` の外部キーに `ON DELETE CASCADE` は付けていない。
//! Todo が残っているリストの削除は外部キー制約違反（[`InfraError`]）になり、
//! 所属する Todo は削除されない。

use async_trait::async_trait;
use sqlx::PgPool;
use todo_domain::list::{List, ListId, NewList};

use crate::error::InfraError;

/// リストリポジトリトレイト
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// 全リストを ID 昇順で取得する
    async fn find_all(&self) -> Result<Vec<List>, InfraError>;

    /// ID でリストを検索する
    async fn find_by_id(&self, id: &ListId) -> Result<Option<List>, InfraError>;

    /// リストを挿入し、採番された ID 付きのリストを返す
    async fn insert(&self, list: &NewList) -> Result<List, InfraError>;

    /// リストを削除する
    ///
    /// 対象のリストが存在した場合は `true`、存在しなかった場合は `false`。
    async fn delete(&self, id: &ListId) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の ListRepository
#[derive(Debug, Clone)]
pub struct PostgresListRepository {
    pool: PgPool,
}

impl PostgresListRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `list` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct ListRow {
    list_id: i64,
    title:   String,
}

impl From<ListRow> for List {
    fn from(row: ListRow) -> Self {
        List::from_db(ListId::from_i64(row.list_id), row.title)
    }
}

#[async_trait]
impl ListRepository for PostgresListRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<List>, InfraError> {
        let rows = sqlx::query_as::<_, ListRow>(
            r#"
            SELECT list_id, title
            FROM list
            ORDER BY list_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(List::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &ListId) -> Result<Option<List>, InfraError> {
        let row = sqlx::query_as::<_, ListRow>(
            r#"
            SELECT list_id, title
            FROM list
            WHERE list_id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(List::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, list: &NewList) -> Result<List, InfraError> {
        let list_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO list (title)
            VALUES ($1)
            RETURNING list_id
            "#,
        )
        .bind(list.title().as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(list.clone().into_list(ListId::from_i64(list_id)))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &ListId) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM list WHERE list_id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
