//! Todo 管理ユースケース
//!
//! 親リストの存在確認は呼び出し側（ハンドラ）が [`ListUseCaseImpl::get`] で行う。
//!
//! [`ListUseCaseImpl::get`]: crate::usecase::ListUseCaseImpl::get

use std::sync::Arc;

use todo_domain::{
    list::ListId,
    todo::{NewTodo, Todo, TodoId},
};
use todo_infra::repository::TodoRepository;

use crate::error::ServiceError;

/// Todo 管理ユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// 全 Todo を取得する（ID 昇順）
    pub async fn list_all(&self) -> Result<Vec<Todo>, ServiceError> {
        let todos = self.todo_repository.find_all().await?;
        Ok(todos)
    }

    /// 指定リストに属する Todo を取得する
    ///
    /// 該当がなければ空。リスト自体が存在しなくてもエラーにはしない。
    pub async fn list_by_parent(&self, list_id: ListId) -> Result<Vec<Todo>, ServiceError> {
        let todos = self.todo_repository.find_by_list_id(&list_id).await?;
        Ok(todos)
    }

    /// Todo を未完了状態で作成し、採番された ID を返す
    pub async fn add(
        &self,
        description: Option<String>,
        list_id: ListId,
    ) -> Result<TodoId, ServiceError> {
        let new_todo = NewTodo::new(description, list_id)?;
        let todo = self.todo_repository.insert(&new_todo).await?;

        tracing::info!(todo_id = %todo.id(), %list_id, "Todo を作成しました");
        Ok(todo.id())
    }

    /// 完了状態を更新する
    ///
    /// 存在した場合は `true`、存在しなかった場合は何も変更せず `false`。
    pub async fn update(&self, id: TodoId, complete: bool) -> Result<bool, ServiceError> {
        let Some(todo) = self.todo_repository.find_by_id(&id).await? else {
            return Ok(false);
        };

        self.todo_repository
            .update(&todo.with_complete(complete))
            .await?;
        Ok(true)
    }

    /// Todo を削除する
    ///
    /// 存在した場合は `true`、存在しなかった場合は `false`。
    pub async fn delete(&self, id: TodoId) -> Result<bool, ServiceError> {
        let deleted = self.todo_repository.delete(&id).await?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use todo_infra::mock::MockTodoRepository;

    use super::*;

    fn create_sut() -> (TodoUseCaseImpl, MockTodoRepository) {
        let repo = MockTodoRepository::new();
        let sut = TodoUseCaseImpl::new(Arc::new(repo.clone()));
        (sut, repo)
    }

    #[tokio::test]
    async fn test_addで作成したtodoは未完了で親リストに紐づく() {
        // Given
        let (sut, _repo) = create_sut();
        let list_id = ListId::from_i64(1);

        // When
        let id = sut.add(Some("Milk".to_string()), list_id).await.unwrap();

        // Then
        let todos = sut.list_by_parent(list_id).await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id(), id);
        assert_eq!(todos[0].description().as_str(), "Milk");
        assert!(!todos[0].complete());
    }

    #[rstest]
    #[case::null(None)]
    #[case::empty(Some(""))]
    #[case::blank(Some("   "))]
    #[tokio::test]
    async fn test_addで不正な説明はvalidationエラーになり保存されない(
        #[case] description: Option<&str>,
    ) {
        let (sut, repo) = create_sut();

        let result = sut
            .add(description.map(str::to_string), ListId::from_i64(1))
            .await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_list_by_parentは他のリストのtodoを含まない() {
        // Given
        let (sut, _repo) = create_sut();
        sut.add(Some("Milk".to_string()), ListId::from_i64(1))
            .await
            .unwrap();
        sut.add(Some("Report".to_string()), ListId::from_i64(2))
            .await
            .unwrap();

        // When
        let todos = sut.list_by_parent(ListId::from_i64(2)).await.unwrap();

        // Then
        let descriptions: Vec<&str> = todos.iter().map(|t| t.description().as_str()).collect();
        assert_eq!(descriptions, vec!["Report"]);
        assert!(
            sut.list_by_parent(ListId::from_i64(3))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_updateで完了状態のみが変更される() {
        // Given
        let (sut, _repo) = create_sut();
        let list_id = ListId::from_i64(1);
        let id = sut.add(Some("Milk".to_string()), list_id).await.unwrap();

        // When
        let updated = sut.update(id, true).await.unwrap();

        // Then
        assert!(updated);
        let todos = sut.list_all().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert!(todos[0].complete());
        assert_eq!(todos[0].description().as_str(), "Milk");
        assert_eq!(todos[0].list_id(), list_id);
    }

    #[tokio::test]
    async fn test_存在しないidのupdateはfalseで何も変更しない() {
        // Given
        let (sut, _repo) = create_sut();
        sut.add(Some("Milk".to_string()), ListId::from_i64(1))
            .await
            .unwrap();
        let before = sut.list_all().await.unwrap();

        // When
        let updated = sut.update(TodoId::from_i64(99), true).await.unwrap();

        // Then
        assert!(!updated);
        assert_eq!(sut.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_deleteは1回目にtrue_2回目にfalseを返す() {
        let (sut, repo) = create_sut();
        let id = sut
            .add(Some("Milk".to_string()), ListId::from_i64(1))
            .await
            .unwrap();

        assert!(sut.delete(id).await.unwrap());
        assert!(!sut.delete(id).await.unwrap());
        assert!(repo.is_empty());
    }
}
