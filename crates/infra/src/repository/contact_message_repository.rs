//! # ContactMessageRepository
//!
//! お問い合わせメッセージの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **作成のみ**: 更新・削除の操作は持たない（永続化後は不変）
//! - **ID・作成日時の割り当て**: `create` で UUID v7 と [`Clock`] の現在時刻を割り当てる
//! - **一意制約なし**: 同一内容の送信もそれぞれ別ドキュメントとして保存する
//!
//! ## ドキュメント形式
//!
//! コレクション `contacts` に 1 メッセージ 1 ドキュメントで格納する:
//!
//! ```json
//! {
//!   "_id": "0190f4c2-...",
//!   "name": "Ada",
//!   "email": "ada@example.com",
//!   "message": "hello",
//!   "createdAt": { "$date": "2026-01-15T09:30:00Z" }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use comingsoon_domain::{
    clock::Clock,
    contact::{ContactMessage, ContactMessageId, NewContactMessage},
};
use mongodb::{Collection, Database, bson};
use serde::{Deserialize, Serialize};

use crate::{InfraError, mongo::CONTACTS_COLLECTION};

/// お問い合わせメッセージリポジトリトレイト
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// メッセージを保存し、ID と作成日時が割り当てられたエンティティを返す
    async fn create(&self, draft: NewContactMessage) -> Result<ContactMessage, InfraError>;
}

/// `contacts` コレクションのドキュメント
///
/// 氏名・メールアドレスを含むため `Debug` は実装しない。
#[derive(Serialize, Deserialize)]
struct ContactDocument {
    #[serde(rename = "_id")]
    id:         String,
    name:       String,
    email:      String,
    message:    String,
    #[serde(rename = "createdAt")]
    created_at: bson::DateTime,
}

impl From<&ContactMessage> for ContactDocument {
    fn from(message: &ContactMessage) -> Self {
        Self {
            id:         message.id().to_string(),
            name:       message.name().as_str().to_string(),
            email:      message.email().as_str().to_string(),
            message:    message.body().as_str().to_string(),
            created_at: bson::DateTime::from_millis(message.created_at().timestamp_millis()),
        }
    }
}

/// MongoDB 実装の ContactMessageRepository
pub struct MongoContactMessageRepository {
    collection: Collection<ContactDocument>,
    clock:      Arc<dyn Clock>,
}

impl MongoContactMessageRepository {
    pub fn new(database: &Database, clock: Arc<dyn Clock>) -> Self {
        Self {
            collection: database.collection(CONTACTS_COLLECTION),
            clock,
        }
    }
}

#[async_trait]
impl ContactMessageRepository for MongoContactMessageRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn create(&self, draft: NewContactMessage) -> Result<ContactMessage, InfraError> {
        let message = ContactMessage::new(ContactMessageId::new(), draft, self.clock.now());

        self.collection
            .insert_one(ContactDocument::from(&message))
            .await?;

        tracing::debug!(contact_message_id = %message.id(), "お問い合わせを保存しました");
        Ok(message)
    }
}
