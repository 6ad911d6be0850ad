//! # Todo
//!
//! リストに属する Todo 項目のドメインモデル。
//!
//! - 作成時は説明文と所属リスト ID のみを受け取り、`complete` は常に `false`
//! - 所属リスト（`list_id`）は作成時に設定され、以後変更されない
//! - 作成後に変更できるのは完了状態（`complete`）のみ
//!
//! 親リストの存在確認はドメイン層では行わない（ストレージ参照が必要なため）。
//! 呼び出し側のユースケースが事前に確認する。

use crate::list::ListId;

define_serial_id! {
    /// Todo の一意識別子（`todo.todo_id`）
    pub struct TodoId;
}

define_required_text! {
    /// Todo の説明文
    ///
    /// # 不変条件
    ///
    /// - null ではない
    /// - 空白文字のみではない
    pub struct TodoDescription {
        message: "Todo の説明は必須です",
    }
}

/// 未保存の Todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    description: TodoDescription,
    complete:    bool,
    list_id:     ListId,
}

impl NewTodo {
    /// 説明文と所属リストから Todo を作成する（未完了状態）
    pub fn new(description: Option<String>, list_id: ListId) -> Result<Self, crate::DomainError> {
        Ok(Self {
            description: TodoDescription::new(description)?,
            complete: false,
            list_id,
        })
    }

    pub fn description(&self) -> &TodoDescription {
        &self.description
    }

    pub fn complete(&self) -> bool {
        self.complete
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    /// 採番された ID を付与して永続化済みエンティティに変換する
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            description: self.description,
            complete: self.complete,
            list_id: self.list_id,
        }
    }
}

/// 永続化済みの Todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:          TodoId,
    description: TodoDescription,
    complete:    bool,
    list_id:     ListId,
}

impl Todo {
    /// データベースから Todo を復元する
    pub fn from_db(id: TodoId, description: String, complete: bool, list_id: ListId) -> Self {
        Self {
            id,
            description: TodoDescription(description),
            complete,
            list_id,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn description(&self) -> &TodoDescription {
        &self.description
    }

    pub fn complete(&self) -> bool {
        self.complete
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    /// 完了状態を変更した新しい Todo を返す
    pub fn with_complete(self, complete: bool) -> Self {
        Self { complete, ..self }
    }
}
