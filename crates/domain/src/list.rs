//! # リスト
//!
//! Todo をまとめるリストのドメインモデル。
//!
//! リストは 0 個以上の Todo を所有する（1 対多の「1」側）。
//! 所有関係は Todo 側の `list_id` 外部キーで表現し、リストは Todo への
//! 参照を持たない。Todo の取得は明示的な親 ID 検索で行う。
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::list::{List, ListId, NewList};
//!
//! // 作成時はタイトルのみ指定し、ID はストレージが採番する
//! let new_list = NewList::new(Some("Groceries".to_string())).unwrap();
//!
//! // 保存後、採番された ID と組み合わせて永続化済みエンティティになる
//! let list = new_list.into_list(ListId::from_i64(1));
//! assert_eq!(list.id().as_i64(), 1);
//! assert_eq!(list.title().as_str(), "Groceries");
//! ```

define_serial_id! {
    /// リストの一意識別子（`list.list_id`）
    pub struct ListId;
}

define_required_text! {
    /// リストのタイトル
    ///
    /// # 不変条件
    ///
    /// - null ではない
    /// - 空白文字のみではない
    pub struct ListTitle {
        message: "リストのタイトルは必須です",
    }
}

/// 未保存のリスト
///
/// コンストラクタはユーザー入力（タイトル）のみを受け取る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    title: ListTitle,
}

impl NewList {
    /// タイトルからリストを作成する
    ///
    /// タイトルが null・空・空白のみの場合は `DomainError::Validation`。
    pub fn new(title: Option<String>) -> Result<Self, crate::DomainError> {
        Ok(Self {
            title: ListTitle::new(title)?,
        })
    }

    pub fn title(&self) -> &ListTitle {
        &self.title
    }

    /// 採番された ID を付与して永続化済みエンティティに変換する
    pub fn into_list(self, id: ListId) -> List {
        List {
            id,
            title: self.title,
        }
    }
}

/// 永続化済みのリスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    id:    ListId,
    title: ListTitle,
}

impl List {
    /// データベースからリストを復元する
    ///
    /// DB には検証済みの値のみが保存されている前提で、再検証は行わない。
    pub fn from_db(id: ListId, title: String) -> Self {
        Self {
            id,
            title: ListTitle(title),
        }
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn title(&self) -> &ListTitle {
        &self.title
    }
}
