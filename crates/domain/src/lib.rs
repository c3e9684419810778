//! # ComingSoon ドメイン層
//!
//! お問い合わせフォームのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 永続化時に ID が割り当てられる [`contact::ContactMessage`]
//! - **値オブジェクト**: 空文字列を許さないテキスト型（名前・メールアドレス・本文）
//! - **ドメインエラー**: 入力値の検証失敗を表現する [`DomainError`]
//!
//! ## 依存関係の方向
//!
//! ```text
//! contact-service → infra → domain
//! ```
//!
//! ドメイン層は DB や HTTP に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 時刻プロバイダ
//! - [`contact`] - お問い合わせメッセージ
//! - [`error`] - ドメインエラー
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use comingsoon_domain::contact::{ContactBody, ContactEmail, ContactName, NewContactMessage};
//!
//! let draft = NewContactMessage::new(
//!     ContactName::new("Ada")?,
//!     ContactEmail::new("ada@example.com")?,
//!     ContactBody::new("hello")?,
//! );
//! assert_eq!(draft.body().as_str(), "hello");
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod contact;
pub mod error;

pub use error::DomainError;
