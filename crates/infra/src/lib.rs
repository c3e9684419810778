//! # ComingSoon インフラ層
//!
//! ドキュメントストア（MongoDB）との接続・通信を担当する。
//!
//! ## 設計方針
//!
//! ドメイン層のモデルを受け取り、永続化の詳細をこのクレートに閉じ込める。
//! ユースケース層はトレイト（[`repository::ContactMessageRepository`],
//! [`mongo::DatabaseProbe`]）にのみ依存し、テストではモックに差し替える。
//!
//! ## 依存関係
//!
//! ```text
//! contact-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`mongo`] - MongoDB 接続管理と疎通確認
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - `mock` - テスト用インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::{sync::Arc, time::Duration};
//!
//! use comingsoon_domain::clock::SystemClock;
//! use comingsoon_infra::{mongo, repository::MongoContactMessageRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let database = mongo::connect("mongodb://localhost:27017/comingsoon", Duration::from_secs(5)).await?;
//!     let repository = MongoContactMessageRepository::new(&database, Arc::new(SystemClock));
//!     Ok(())
//! }
//! ```

pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod mongo;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
pub use mongo::{DatabaseProbe, MongoDatabaseProbe};
