//! # ComingSoon 共有ユーティリティ
//!
//! サービス横断で使う、ビジネスロジックを含まないユーティリティを提供する。
//!
//! - レスポンスボディ（`{ "message": ... }`、ヘルスチェック）
//! - Observability 基盤（`observability` feature）

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod health;
pub mod message_response;
pub mod observability;

pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
pub use message_response::MessageResponse;
