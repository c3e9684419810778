//! # お問い合わせメッセージ
//!
//! お問い合わせフォームから送信された 1 件のメッセージを表現する。
//!
//! ## 不変条件
//!
//! - `name` / `email` / `message` はいずれも空文字列にならない
//! - 永続化後は変更されない（更新・削除の操作は存在しない）
//!
//! ## ライフサイクル
//!
//! ```text
//! ContactSubmission ──validate──▶ NewContactMessage ──create──▶ ContactMessage
//!   (HTTP 入力)                    (ID 未割り当て)               (ID・作成日時付き)
//! ```
//!
//! ID と作成日時は永続化ゲートウェイが割り当てる。
//! 同一内容の送信も別レコードとして扱う（一意制約なし）。

use chrono::{DateTime, Utc};

define_uuid_id! {
    /// お問い合わせメッセージ ID
    pub struct ContactMessageId;
}

define_required_text! {
    /// 送信者名
    pub struct ContactName {
        label: "名前",
        pii: true,
    }
}

define_required_text! {
    /// 送信者メールアドレス
    ///
    /// 形式の検証は行わず、入力の有無のみを確認する。
    pub struct ContactEmail {
        label: "メールアドレス",
        pii: true,
    }
}

define_required_text! {
    /// お問い合わせ本文
    pub struct ContactBody {
        label: "メッセージ",
    }
}

/// 検証済みで、まだ永続化されていないお問い合わせ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    name:  ContactName,
    email: ContactEmail,
    body:  ContactBody,
}

impl NewContactMessage {
    pub fn new(name: ContactName, email: ContactEmail, body: ContactBody) -> Self {
        Self { name, email, body }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn email(&self) -> &ContactEmail {
        &self.email
    }

    pub fn body(&self) -> &ContactBody {
        &self.body
    }
}

/// 永続化済みのお問い合わせメッセージ
///
/// getter のみを公開し、生成後の変更を型で禁止する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    id:         ContactMessageId,
    name:       ContactName,
    email:      ContactEmail,
    body:       ContactBody,
    created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// 未永続化のメッセージに ID と作成日時を割り当てる
    pub fn new(id: ContactMessageId, draft: NewContactMessage, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            body: draft.body,
            created_at,
        }
    }

    pub fn id(&self) -> &ContactMessageId {
        &self.id
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn email(&self) -> &ContactEmail {
        &self.email
    }

    pub fn body(&self) -> &ContactBody {
        &self.body
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
