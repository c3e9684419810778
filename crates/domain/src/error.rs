//! # ドメイン層エラー定義
//!
//! 入力値がドメインの不変条件を満たさないことを表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須フィールドの欠落・空文字列 |
//!
//! ## 使用例
//!
//! ```rust
//! use comingsoon_domain::DomainError;
//!
//! fn require(value: &str) -> Result<(), DomainError> {
//!     if value.is_empty() {
//!         return Err(DomainError::Validation("名前は必須です".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require("").is_err());
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、HTTP レスポンスに変換する。
/// メッセージはログ用であり、クライアントにはそのまま返さない。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 必須フィールドが未入力（欠落・`null`・空文字列）の場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
