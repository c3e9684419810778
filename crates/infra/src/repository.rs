//! # リポジトリ実装
//!
//! - **依存性逆転**: ユースケース層はトレイトに依存し、実装をこのクレートで提供する
//! - **ストア抽象化**: MongoDB 固有のドキュメント形式をカプセル化する

pub mod contact_message_repository;

pub use contact_message_repository::{ContactMessageRepository, MongoContactMessageRepository};
