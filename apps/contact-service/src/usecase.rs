//! # ユースケース層
//!
//! Contact Service のビジネスロジックを実装する。
//!
//! - **トレイトベースの設計**: ハンドラはトレイトに依存し、テストではスタブに差し替える
//! - **依存性注入**: リポジトリは起動時に構築して外部から注入する

pub mod contact;

use async_trait::async_trait;
use comingsoon_domain::contact::ContactMessage;
pub use contact::{ContactSubmission, ContactUseCaseImpl};

use crate::error::ContactError;

/// お問い合わせユースケーストレイト
#[async_trait]
pub trait ContactUseCase: Send + Sync {
    /// お問い合わせを検証して保存する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(ContactMessage)`: 保存されたメッセージ
    /// - `Err(ContactError::Validation)`: 必須フィールドの欠落（保存は行わない）
    /// - `Err(ContactError::Database)`: 保存に失敗
    async fn submit_contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, ContactError>;
}

#[async_trait]
impl ContactUseCase for ContactUseCaseImpl {
    async fn submit_contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, ContactError> {
        self.submit_contact(submission).await
    }
}
