//! # お問い合わせユースケース
//!
//! 1. 入力（3 つの任意フィールド）を検証する
//! 2. 検証に通った場合のみリポジトリの `create` を 1 回呼ぶ
//!
//! 検証はすべてのフィールドについて保存より前に行うため、部分的な書き込みは起きない。
//! リクエスト間で状態は持たない。

use std::sync::Arc;

use comingsoon_domain::{
    DomainError,
    contact::{ContactBody, ContactEmail, ContactMessage, ContactName, NewContactMessage},
};
use comingsoon_infra::repository::ContactMessageRepository;
use serde::Deserialize;

use crate::error::ContactError;

/// お問い合わせフォームの送信内容
///
/// 外部入力のため各フィールドは任意とし、[`ContactSubmission::validate`] で検証する。
/// 未知のフィールドは無視する。リクエストボディからは [`ContactSubmission::from_json`]
/// で組み立てる。
#[derive(Debug, Default, Deserialize)]
pub struct ContactSubmission {
    pub name:    Option<String>,
    pub email:   Option<String>,
    pub message: Option<String>,
}

impl ContactSubmission {
    /// JSON オブジェクトからのみ組み立てる
    ///
    /// 配列（`["Ada", ...]`）など JSON オブジェクト以外は拒否する。
    /// フィールドの型不一致も同じエラーになる。
    pub fn from_json(value: serde_json::Value) -> Result<Self, ContactError> {
        match value {
            serde_json::Value::Object(fields) => {
                serde_json::from_value(serde_json::Value::Object(fields))
                    .map_err(|e| ContactError::MalformedBody(e.to_string()))
            }
            _ => Err(ContactError::MalformedBody(
                "JSON オブジェクトではありません".to_string(),
            )),
        }
    }

    /// 3 フィールドすべてが存在し空でなければ [`NewContactMessage`] を返す
    ///
    /// 欠落・`null`・空文字列はいずれもバリデーションエラー。
    pub fn validate(self) -> Result<NewContactMessage, DomainError> {
        let name = ContactName::new(self.name.unwrap_or_default())?;
        let email = ContactEmail::new(self.email.unwrap_or_default())?;
        let body = ContactBody::new(self.message.unwrap_or_default())?;

        Ok(NewContactMessage::new(name, email, body))
    }
}

/// お問い合わせユースケースの実装
pub struct ContactUseCaseImpl {
    repository: Arc<dyn ContactMessageRepository>,
}

impl ContactUseCaseImpl {
    pub fn new(repository: Arc<dyn ContactMessageRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip_all)]
    pub async fn submit_contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, ContactError> {
        let draft = submission.validate()?;
        let message = self.repository.create(draft).await?;

        tracing::info!(contact_message_id = %message.id(), "お問い合わせを受け付けました");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use comingsoon_infra::mock::MockContactMessageRepository;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn submission(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactSubmission {
        ContactSubmission {
            name:    name.map(str::to_string),
            email:   email.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    fn valid() -> ContactSubmission {
        submission(Some("Ada"), Some("ada@example.com"), Some("hello"))
    }

    #[tokio::test]
    async fn test_submit_contact_有効な入力で1件保存される() {
        // Given
        let repo = MockContactMessageRepository::new();
        let sut = ContactUseCaseImpl::new(Arc::new(repo.clone()));

        // When
        let created = sut.submit_contact(valid()).await.unwrap();

        // Then
        let stored = repo.messages();
        assert_eq!(stored, vec![created]);
        assert_eq!(stored[0].name().as_str(), "Ada");
        assert_eq!(stored[0].email().as_str(), "ada@example.com");
        assert_eq!(stored[0].body().as_str(), "hello");
        assert_eq!(repo.create_call_count(), 1);
    }

    #[rstest]
    #[case::name欠落(submission(None, Some("ada@example.com"), Some("hello")))]
    #[case::email欠落(submission(Some("Ada"), None, Some("hello")))]
    #[case::message欠落(submission(Some("Ada"), Some("ada@example.com"), None))]
    #[case::name空文字列(submission(Some(""), Some("ada@example.com"), Some("hello")))]
    #[case::email空文字列(submission(Some("Ada"), Some(""), Some("hello")))]
    #[case::message空文字列(submission(Some("Ada"), Some("ada@example.com"), Some("")))]
    #[case::全て欠落(ContactSubmission::default())]
    #[tokio::test]
    async fn test_submit_contact_必須フィールド不足では保存しない(#[case] input: ContactSubmission) {
        // Given
        let repo = MockContactMessageRepository::new();
        let sut = ContactUseCaseImpl::new(Arc::new(repo.clone()));

        // When
        let result = sut.submit_contact(input).await;

        // Then
        assert!(matches!(result, Err(ContactError::Validation(_))));
        assert_eq!(repo.create_call_count(), 0);
        assert!(repo.messages().is_empty());
    }

    #[tokio::test]
    async fn test_submit_contact_ストア障害はdatabaseエラー() {
        let repo = MockContactMessageRepository::unavailable();
        let sut = ContactUseCaseImpl::new(Arc::new(repo.clone()));

        let result = sut.submit_contact(valid()).await;

        assert!(matches!(result, Err(ContactError::Database(_))));
        assert_eq!(repo.create_call_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_contact_同一内容を2回送ると別レコードになる() {
        let repo = MockContactMessageRepository::new();
        let sut = ContactUseCaseImpl::new(Arc::new(repo.clone()));

        let first = sut.submit_contact(valid()).await.unwrap();
        let second = sut.submit_contact(valid()).await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(repo.messages().len(), 2);
    }

    #[test]
    fn test_validate_空白のみの値は空でないため受け付ける() {
        let draft = submission(Some(" "), Some(" "), Some(" ")).validate().unwrap();

        assert_eq!(draft.name().as_str(), " ");
    }

    #[test]
    fn test_contact_submission_未知のフィールドは無視する() {
        let input: ContactSubmission = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","message":"hello","phone":"000"}"#,
        )
        .unwrap();

        assert!(input.validate().is_ok());
    }

    #[rstest]
    #[case::配列(serde_json::json!(["Ada", "ada@example.com", "hello"]))]
    #[case::文字列(serde_json::json!("Ada"))]
    #[case::null(serde_json::Value::Null)]
    #[case::型不一致(serde_json::json!({ "name": 123, "email": "ada@example.com", "message": "hello" }))]
    fn test_from_json_オブジェクト以外は不正なボディ(#[case] input: serde_json::Value) {
        let result = ContactSubmission::from_json(input);

        assert!(matches!(result, Err(ContactError::MalformedBody(_))));
    }

    #[test]
    fn test_from_json_オブジェクトはフィールドを読み取る() {
        let input = ContactSubmission::from_json(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com"
        }))
        .unwrap();

        assert_eq!(input.name.as_deref(), Some("Ada"));
        assert_eq!(input.email.as_deref(), Some("ada@example.com"));
        assert!(input.message.is_none());
    }

    #[test]
    fn test_contact_submission_nullは欠落として扱う() {
        let input: ContactSubmission =
            serde_json::from_str(r#"{"name":null,"email":"ada@example.com","message":"hello"}"#)
                .unwrap();

        assert!(input.name.is_none());
        assert!(input.validate().is_err());
    }
}
