//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックは usecase 層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: 稼働確認（`/`, `/health`, `/health/ready`）
//! - `hello`: 固定メッセージを返すサンプルルート
//! - `contact`: お問い合わせ受付

pub mod contact;
pub mod health;
pub mod hello;

pub use contact::{ContactState, SUBMIT_SUCCESS_MESSAGE, submit_contact};
pub use health::{LIVENESS_MESSAGE, ReadinessState, health_check, liveness, readiness_check};
pub use hello::{HELLO_MESSAGE, some_route};
