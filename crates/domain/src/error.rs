//! # ドメイン層エラー定義
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須フィールドが null / 空白のみ |
//! | `NotFound` | 404 Not Found | 指定 ID のエンティティが存在しない |
//! | `Conflict` | 409 Conflict | 現在の状態では操作できない（Todo が残っているリストの削除） |
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::DomainError;
//!
//! let error = DomainError::NotFound {
//!     entity_type: "List",
//!     id:          "42".to_string(),
//! };
//! assert_eq!(error.to_string(), "List が見つかりません: 42");
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    /// 保存前に検出されるため、このエラーが返った時点で書き込みは発生していない。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// エンティティが見つからない
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"List", "Todo"）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },

    /// 現在の状態と矛盾する操作
    ///
    /// 拒否した時点で書き込みは発生していない。
    #[error("競合エラー: {0}")]
    Conflict(String),
}

impl DomainError {
    /// 拒否理由のメッセージ部分のみを取得する
    ///
    /// HTTP レスポンスの `detail` に載せる文言で、`Display` のプレフィックスを含まない。
    pub fn reason(&self) -> String {
        match self {
            DomainError::Validation(msg) | DomainError::Conflict(msg) => msg.clone(),
            DomainError::NotFound { .. } => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validationのdisplayにプレフィックスが付く() {
        let error = DomainError::Validation("タイトルは必須です".to_string());
        assert_eq!(error.to_string(), "バリデーションエラー: タイトルは必須です");
    }

    #[test]
    fn test_reasonはvalidationのメッセージのみを返す() {
        let error = DomainError::Validation("タイトルは必須です".to_string());
        assert_eq!(error.reason(), "タイトルは必須です");
    }

    #[test]
    fn test_reasonはnot_foundのdisplayを返す() {
        let error = DomainError::NotFound {
            entity_type: "Todo",
            id:          "7".to_string(),
        };
        assert_eq!(error.reason(), "Todo が見つかりません: 7");
    }

    #[test]
    fn test_reasonはconflictのメッセージのみを返す() {
        let error = DomainError::Conflict("Todo が残っているリストは削除できません: 1".to_string());
        assert_eq!(error.to_string(), "競合エラー: Todo が残っているリストは削除できません: 1");
        assert_eq!(error.reason(), "Todo が残っているリストは削除できません: 1");
    }
}
