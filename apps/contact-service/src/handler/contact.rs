//! # お問い合わせハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /api/contact` - お問い合わせの受付
//!
//! | 結果 | HTTP ステータス | `message` |
//! |------|----------------|-----------|
//! | 保存成功 | 201 | `✅ Message received successfully!` |
//! | 必須フィールド不足 | 400 | `All fields are required` |
//! | ボディ解釈不能 | 400 | `Invalid request body` |
//! | 保存失敗 | 500 | `Internal Server Error` |

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use comingsoon_shared::MessageResponse;

use crate::{
    error::ContactError,
    usecase::{ContactSubmission, ContactUseCase},
};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "✅ Message received successfully!";

/// お問い合わせハンドラの共有状態
pub struct ContactState {
    pub usecase: Arc<dyn ContactUseCase>,
}

/// POST /api/contact
///
/// JSON として解釈できないボディ、および JSON オブジェクト以外のボディは
/// [`ContactError::MalformedBody`] に変換し、レスポンス形式を揃える。
pub async fn submit_contact(
    State(state): State<Arc<ContactState>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, ContactError> {
    let Json(body) =
        payload.map_err(|rejection| ContactError::MalformedBody(rejection.body_text()))?;
    let submission = ContactSubmission::from_json(body)?;

    state.usecase.submit_contact(submission).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(SUBMIT_SUCCESS_MESSAGE)),
    ))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Method, Request},
        routing::post,
    };
    use comingsoon_domain::contact::ContactMessage;
    use comingsoon_infra::{
        InfraError,
        mock::{MOCK_STORE_FAILURE, MockContactMessageRepository},
        repository::ContactMessageRepository,
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    // テスト用スタブ
    struct StubContactUseCase {
        store_available: bool,
    }

    impl StubContactUseCase {
        fn success() -> Self {
            Self {
                store_available: true,
            }
        }

        fn store_failure() -> Self {
            Self {
                store_available: false,
            }
        }
    }

    #[async_trait]
    impl ContactUseCase for StubContactUseCase {
        async fn submit_contact(
            &self,
            submission: ContactSubmission,
        ) -> Result<ContactMessage, ContactError> {
            let draft = submission.validate()?;
            if !self.store_available {
                return Err(InfraError::unexpected(MOCK_STORE_FAILURE).into());
            }
            Ok(MockContactMessageRepository::new().create(draft).await?)
        }
    }

    fn create_test_app(usecase: StubContactUseCase) -> Router {
        let state = Arc::new(ContactState {
            usecase: Arc::new(usecase),
        });

        Router::new()
            .route("/api/contact", post(submit_contact))
            .with_state(state)
    }

    fn json_request(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(sut: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = sut.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_submit_contact_成功で201() {
        // Given
        let sut = create_test_app(StubContactUseCase::success());
        let body = serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "hello"
        });

        // When
        let (status, json) = send(sut, json_request(&body.to_string())).await;

        // Then
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            json,
            serde_json::json!({ "message": "✅ Message received successfully!" })
        );
    }

    #[tokio::test]
    async fn test_submit_contact_必須フィールド不足で400() {
        let sut = create_test_app(StubContactUseCase::success());

        let (status, json) = send(sut, json_request(r#"{"name":"Ada","email":"ada@example.com"}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "message": "All fields are required" }));
    }

    #[tokio::test]
    async fn test_submit_contact_保存失敗で500() {
        let sut = create_test_app(StubContactUseCase::store_failure());

        let (status, json) = send(
            sut,
            json_request(r#"{"name":"Ada","email":"ada@example.com","message":"hello"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "message": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn test_submit_contact_不正なjsonで400() {
        let sut = create_test_app(StubContactUseCase::success());

        let (status, json) = send(sut, json_request(r#"{"name":"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "message": "Invalid request body" }));
    }

    #[tokio::test]
    async fn test_submit_contact_配列ボディは400() {
        let sut = create_test_app(StubContactUseCase::success());

        let (status, json) = send(sut, json_request(r#"["Ada","ada@example.com","hello"]"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "message": "Invalid request body" }));
    }

    #[tokio::test]
    async fn test_submit_contact_content_typeなしで400() {
        let sut = create_test_app(StubContactUseCase::success());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .body(Body::from(
                r#"{"name":"Ada","email":"ada@example.com","message":"hello"}"#,
            ))
            .unwrap();

        let (status, json) = send(sut, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "message": "Invalid request body" }));
    }
}
