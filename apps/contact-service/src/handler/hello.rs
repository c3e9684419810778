//! # サンプルルート
//!
//! フロントエンドからの疎通確認に使う固定レスポンス。

use axum::Json;
use comingsoon_shared::MessageResponse;

pub const HELLO_MESSAGE: &str = "Hello from the backend!";

/// GET /api/some-route
pub async fn some_route() -> Json<MessageResponse> {
    Json(MessageResponse::new(HELLO_MESSAGE))
}
