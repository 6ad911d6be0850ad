//! # 必須テキストの空白判定
//!
//! 「空白のみ」とみなす文字は Unicode の White_Space から改行なしスペース
//! （U+00A0, U+2007, U+202F）と U+0085 を除き、情報分離文字 U+001C〜U+001F を加えたもの。
//! 改行なしスペースは見た目が空白でも内容として扱い、受け付ける。

/// 空白とみなす文字か
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        '\u{001C}'..='\u{001F}' => true,
        c => c.is_whitespace(),
    }
}

/// 空文字列、または空白とみなす文字のみで構成されているか
pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_blank_char)
}
