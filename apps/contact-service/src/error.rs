//! # Contact Service エラー定義
//!
//! Contact Service で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | HTTP ステータス | レスポンスの `message` |
//! |--------|----------------|------------------------|
//! | `Validation` | 400 | `All fields are required` |
//! | `MalformedBody` | 400 | `Invalid request body` |
//! | `Database` | 500 | `Internal Server Error` |
//!
//! 内部エラーの詳細はサーバーログにのみ出力し、レスポンスには含めない。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use comingsoon_domain::DomainError;
use comingsoon_infra::InfraError;
use comingsoon_shared::MessageResponse;
use thiserror::Error;

/// 必須フィールド欠落時のメッセージ
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// JSON として解釈できないリクエストボディに対するメッセージ
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

/// 内部エラー時のメッセージ
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Contact Service で発生するエラー
#[derive(Debug, Error)]
pub enum ContactError {
   /// 必須フィールドの欠落・空文字列
   #[error(transparent)]
   Validation(#[from] DomainError),

   /// JSON オブジェクトとして解釈できないボディ、型の不一致、Content-Type 不正
   #[error("リクエストボディが不正です: {0}")]
   MalformedBody(String),

   /// バッキングストアへの書き込み失敗
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl IntoResponse for ContactError {
   fn into_response(self) -> Response {
      let (status, message) = match &self {
         ContactError::Validation(e) => {
            tracing::debug!(error = %e, "入力値の検証に失敗しました");
            (StatusCode::BAD_REQUEST, ALL_FIELDS_REQUIRED)
         }
         ContactError::MalformedBody(reason) => {
            tracing::debug!(reason = %reason, "リクエストボディを解釈できませんでした");
            (StatusCode::BAD_REQUEST, INVALID_REQUEST_BODY)
         }
         ContactError::Database(e) => {
            tracing::error!(
               error = %e,
               span_trace = %e.span_trace(),
               "データベースエラー"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
         }
      };

      (status, Json(MessageResponse::new(message))).into_response()
   }
}

#[cfg(test)]
mod tests {
   use comingsoon_infra::mock::MOCK_STORE_FAILURE;

   use super::*;

   async fn into_parts(error: ContactError) -> (StatusCode, serde_json::Value) {
      let response = error.into_response();
      let status = response.status();
      let body = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      (status, serde_json::from_slice(&body).unwrap())
   }

   #[tokio::test]
   async fn test_validationは400と固定メッセージ() {
      let error = ContactError::from(DomainError::Validation("名前は必須です".to_string()));

      let (status, json) = into_parts(error).await;

      assert_eq!(status, StatusCode::BAD_REQUEST);
      assert_eq!(json, serde_json::json!({ "message": "All fields are required" }));
   }

   #[tokio::test]
   async fn test_malformed_bodyは400() {
      let error = ContactError::MalformedBody("EOF while parsing".to_string());

      let (status, json) = into_parts(error).await;

      assert_eq!(status, StatusCode::BAD_REQUEST);
      assert_eq!(json, serde_json::json!({ "message": "Invalid request body" }));
   }

   #[tokio::test]
   async fn test_databaseは500で内部エラーを含まない() {
      let error = ContactError::from(InfraError::unexpected(MOCK_STORE_FAILURE));

      let (status, json) = into_parts(error).await;

      assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
      assert_eq!(json, serde_json::json!({ "message": "Internal Server Error" }));
      assert!(!json.to_string().contains("connection refused"));
   }
}
