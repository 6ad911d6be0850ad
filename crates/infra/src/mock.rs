//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! ID は PostgreSQL の `BIGSERIAL` と同様に 1 から連番で採番し、削除しても再利用しない。
//! 外部キー制約は再現しない。Todo が残っているリストの削除はユースケース層で拒否する。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_domain::{
    list::{List, ListId, NewList},
    todo::{NewTodo, Todo, TodoId},
};

use crate::{
    error::InfraError,
    repository::{ListRepository, TodoRepository},
};

/// 連番採番付きのインメモリテーブル
#[derive(Debug)]
struct Table<T> {
    rows:    Vec<T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows:    Vec::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

// ===== MockTodoRepository =====

#[derive(Clone, Default)]
pub struct MockTodoRepository {
    todos: Arc<Mutex<Table<Todo>>>,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みの Todo 件数
    pub fn len(&self) -> usize {
        self.todos.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        Ok(self.todos.lock().unwrap().rows.clone())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        Ok(self
            .todos
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|t| t.id() == *id)
            .cloned())
    }

    async fn find_by_list_id(&self, list_id: &ListId) -> Result<Vec<Todo>, InfraError> {
        Ok(self
            .todos
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|t| t.list_id() == *list_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, todo: &NewTodo) -> Result<Todo, InfraError> {
        let mut todos = self.todos.lock().unwrap();
        let id = TodoId::from_i64(todos.next_id());
        let todo = todo.clone().into_todo(id);
        todos.rows.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
        let mut todos = self.todos.lock().unwrap();
        if let Some(stored) = todos.rows.iter_mut().find(|t| t.id() == todo.id()) {
            *stored = todo.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError> {
        let mut todos = self.todos.lock().unwrap();
        let before = todos.rows.len();
        todos.rows.retain(|t| t.id() != *id);
        Ok(todos.rows.len() < before)
    }
}

// ===== MockListRepository =====

#[derive(Clone, Default)]
pub struct MockListRepository {
    lists: Arc<Mutex<Table<List>>>,
}

impl MockListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みのリスト件数
    pub fn len(&self) -> usize {
        self.lists.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ListRepository for MockListRepository {
    async fn find_all(&self) -> Result<Vec<List>, InfraError> {
        Ok(self.lists.lock().unwrap().rows.clone())
    }

    async fn find_by_id(&self, id: &ListId) -> Result<Option<List>, InfraError> {
        Ok(self
            .lists
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|l| l.id() == *id)
            .cloned())
    }

    async fn insert(&self, list: &NewList) -> Result<List, InfraError> {
        let mut lists = self.lists.lock().unwrap();
        let id = ListId::from_i64(lists.next_id());
        let list = list.clone().into_list(id);
        lists.rows.push(list.clone());
        Ok(list)
    }

    async fn delete(&self, id: &ListId) -> Result<bool, InfraError> {
        let mut lists = self.lists.lock().unwrap();
        let before = lists.rows.len();
        lists.rows.retain(|l| l.id() != *id);
        Ok(lists.rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn new_list(title: &str) -> NewList {
        NewList::new(Some(title.to_string())).unwrap()
    }

    fn new_todo(description: &str, list_id: ListId) -> NewTodo {
        NewTodo::new(Some(description.to_string()), list_id).unwrap()
    }

    #[tokio::test]
    async fn test_insertでidが1から連番で採番される() {
        let sut = MockListRepository::default();

        let first = sut.insert(&new_list("Groceries")).await.unwrap();
        let second = sut.insert(&new_list("Work")).await.unwrap();

        assert_eq!(first.id(), ListId::from_i64(1));
        assert_eq!(second.id(), ListId::from_i64(2));
    }

    #[tokio::test]
    async fn test_削除したidは再利用されない() {
        let sut = MockTodoRepository::new();
        let list_id = ListId::from_i64(1);
        let first = sut.insert(&new_todo("Milk", list_id)).await.unwrap();

        assert!(sut.delete(&first.id()).await.unwrap());
        let second = sut.insert(&new_todo("Eggs", list_id)).await.unwrap();

        assert_eq!(second.id(), TodoId::from_i64(2));
    }

    #[tokio::test]
    async fn test_リスト削除は対象のリストのみ削除する() {
        let sut = MockListRepository::new();
        let groceries = sut.insert(&new_list("Groceries")).await.unwrap();
        let work = sut.insert(&new_list("Work")).await.unwrap();

        assert!(sut.delete(&groceries.id()).await.unwrap());
        assert!(!sut.delete(&groceries.id()).await.unwrap());
        assert_eq!(sut.find_all().await.unwrap(), vec![work]);
    }

    #[tokio::test]
    async fn test_find_by_list_idは指定リストのtodoのみ返す() {
        let sut = MockTodoRepository::new();
        sut.insert(&new_todo("Milk", ListId::from_i64(1))).await.unwrap();
        let report = sut.insert(&new_todo("Report", ListId::from_i64(2))).await.unwrap();

        let todos = sut.find_by_list_id(&ListId::from_i64(2)).await.unwrap();

        assert_eq!(todos, vec![report]);
    }
}
