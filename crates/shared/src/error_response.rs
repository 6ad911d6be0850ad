//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! Todo API が 404・409・500 で返すエラーボディ。
//!
//! `type` URI・`title`・`status` は [`ProblemKind`] から一意に決まり、
//! 呼び出し側が指定するのは `detail` のみ。
//! 400 系（入力検証エラー・リクエストの解釈失敗）はメッセージ本文のみを返すため、ここでは扱わない。
//!
//! axum の `IntoResponse` 変換はサービス側で行う（shared に axum 依存を入れない）。

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://todo.example.com/errors";

/// エラーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    /// 指定 ID のリソースが存在しない
    NotFound,
    /// 現在の状態では操作できない
    Conflict,
    /// ストレージ障害など
    Internal,
}

impl ProblemKind {
    /// `type` URI の末尾
    pub fn slug(self) -> &'static str {
        match self {
            Self::NotFound => "not-found",
            Self::Conflict => "conflict",
            Self::Internal => "internal-error",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::NotFound => "Not Found",
            Self::Conflict => "Conflict",
            Self::Internal => "Internal Server Error",
        }
    }

    /// HTTP ステータスコード
    pub fn status(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Internal => 500,
        }
    }
}

/// エラーレスポンス（RFC 9457 Problem Details）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
}

impl ErrorResponse {
    pub fn new(kind: ProblemKind, detail: impl Into<String>) -> Self {
        Self {
            error_type: format!("{ERROR_TYPE_BASE}/{}", kind.slug()),
            title:      kind.title().to_string(),
            status:     kind.status(),
            detail:     detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(ProblemKind::NotFound, detail)
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::new(ProblemKind::Conflict, detail)
    }

    /// 500 Internal Server Error
    ///
    /// detail は固定文言。原因はサーバーログにのみ出力する。
    pub fn internal_error() -> Self {
        Self::new(ProblemKind::Internal, "内部エラーが発生しました")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_conflictは409と専用のtypeを持つ() {
        let error = ErrorResponse::conflict("Todo が残っているリストは削除できません: 1");

        assert_eq!(
            error,
            ErrorResponse {
                error_type: "https://todo.example.com/errors/conflict".to_string(),
                title:      "Conflict".to_string(),
                status:     409,
                detail:     "Todo が残っているリストは削除できません: 1".to_string(),
            }
        );
    }

    #[test]
    fn test_jsonではerror_typeがtypeとしてシリアライズされる() {
        let json = serde_json::to_value(ErrorResponse::not_found("Todo が見つかりません: 3")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "https://todo.example.com/errors/not-found",
                "title": "Not Found",
                "status": 404,
                "detail": "Todo が見つかりません: 3",
            })
        );
    }

    #[test]
    fn test_種類ごとのステータス() {
        assert_eq!(ErrorResponse::not_found("").status, 404);
        assert_eq!(ErrorResponse::conflict("").status, 409);
        assert_eq!(ErrorResponse::internal_error().status, 500);
        assert_eq!(ErrorResponse::internal_error().detail, "内部エラーが発生しました");
    }
}
