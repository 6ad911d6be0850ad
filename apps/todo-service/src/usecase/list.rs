//! リスト管理ユースケース

use std::sync::Arc;

use todo_domain::{
    DomainError,
    list::{List, ListId, NewList},
};
use todo_infra::repository::{ListRepository, TodoRepository};

use crate::error::ServiceError;

/// リスト管理ユースケース
pub struct ListUseCaseImpl {
    list_repository: Arc<dyn ListRepository>,
    todo_repository: Arc<dyn TodoRepository>,
}

impl ListUseCaseImpl {
    pub fn new(
        list_repository: Arc<dyn ListRepository>,
        todo_repository: Arc<dyn TodoRepository>,
    ) -> Self {
        Self {
            list_repository,
            todo_repository,
        }
    }

    /// 全リストを取得する（ID 昇順）
    pub async fn list_all(&self) -> Result<Vec<List>, ServiceError> {
        let lists = self.list_repository.find_all().await?;
        Ok(lists)
    }

    /// リストを作成し、採番された ID を返す
    ///
    /// タイトルが null・空・空白のみの場合は `Validation` を返し、何も保存しない。
    pub async fn add(&self, title: Option<String>) -> Result<ListId, ServiceError> {
        let new_list = NewList::new(title)?;
        let list = self.list_repository.insert(&new_list).await?;

        tracing::info!(list_id = %list.id(), "リストを作成しました");
        Ok(list.id())
    }

    /// ID でリストを取得する
    pub async fn get(&self, id: ListId) -> Result<Option<List>, ServiceError> {
        let list = self.list_repository.find_by_id(&id).await?;
        Ok(list)
    }

    /// リストを削除する
    ///
    /// 存在した場合は削除して `true`、存在しなかった場合は `false`。
    /// Todo が残っているリストは `Conflict` で拒否し、何も削除しない。
    pub async fn delete(&self, id: ListId) -> Result<bool, ServiceError> {
        let todos = self.todo_repository.find_by_list_id(&id).await?;
        if !todos.is_empty() {
            return Err(DomainError::Conflict(format!(
                "Todo が残っているリストは削除できません: {id}"
            ))
            .into());
        }

        let deleted = self.list_repository.delete(&id).await?;
        if deleted {
            tracing::info!(list_id = %id, "リストを削除しました");
        }
        Ok(deleted)
    }
}
