/// ストレージ採番の整数 ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`i64` をラップ、`Copy`）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)`
/// - `from_i64()`: DB の値や パスパラメータから復元
/// - `as_i64()`: 内部値を取得
///
/// ID の採番はストレージ層（`BIGSERIAL`）が行うため、`new()` は生成しない。
///
/// # 使用例
///
/// ```rust
/// use todo_domain::list::ListId;
///
/// let id = ListId::from_i64(42);
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
macro_rules! define_serial_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(i64);

        impl $Name {
            /// 既存の整数値から ID を作成する
            pub fn from_i64(value: i64) -> Self {
                Self(value)
            }

            /// 内部の整数値を取得する
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }
    };
}

/// 必須テキスト（null・空白のみ不可）の Newtype を定義する宣言型マクロ
///
/// 生成されるもの:
/// - Newtype 構造体（`String` をラップ）
/// - `new(Option<String>)`: `None`、空文字列、空白のみの文字列を
///   [`DomainError::Validation`](crate::DomainError::Validation) で拒否
///   （空白の判定は [`text::is_blank`](crate::text::is_blank)）
/// - `as_str()`, `into_string()`, `Display`
///
/// 値は受け取ったまま保持する（trim しない）。保存後の取得で入力と同一の値を返すため。
///
/// # 引数
///
/// - `$message`: 検証失敗時のメッセージ
///
/// # 使用例
///
/// ```rust
/// use todo_domain::todo::TodoDescription;
///
/// let description = TodoDescription::new(Some(" Milk ".to_string())).unwrap();
/// assert_eq!(description.as_str(), " Milk ");
///
/// assert!(TodoDescription::new(None).is_err());
/// assert!(TodoDescription::new(Some("\t\n".to_string())).is_err());
/// ```
macro_rules! define_required_text {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            message: $message:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl $Name {
            pub fn new(value: Option<String>) -> Result<Self, $crate::DomainError> {
                match value {
                    Some(value) if !$crate::text::is_blank(&value) => Ok(Self(value)),
                    _ => Err($crate::DomainError::Validation($message.to_string())),
                }
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 所有権を持つ文字列に変換する
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
