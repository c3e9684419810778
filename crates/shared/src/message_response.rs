//! # メッセージレスポンス
//!
//! 公開 API の成功・失敗レスポンスで共通の `{ "message": string }` 形式を提供する。
//! フロントエンドはステータスコードで成否を判断し、`message` をそのまま表示する。

use serde::{Deserialize, Serialize};

/// `{ "message": string }` 形式のレスポンスボディ
///
/// ## 使用例
///
/// ```
/// use comingsoon_shared::MessageResponse;
///
/// let response = MessageResponse::new("Hello from the backend!");
/// assert_eq!(response.message, "Hello from the backend!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializeでmessageのみを持つjsonになる() {
        let response = MessageResponse::new("All fields are required");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "message": "All fields are required" })
        );
    }

    #[test]
    fn test_絵文字を含むメッセージもそのまま出力する() {
        let response = MessageResponse::new("✅ Message received successfully!");
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(json, r#"{"message":"✅ Message received successfully!"}"#);
    }
}
