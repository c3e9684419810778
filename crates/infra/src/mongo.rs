//! # MongoDB 接続管理
//!
//! ドキュメントストアへの接続確立と疎通確認を行う。
//!
//! ## 設計方針
//!
//! - **起動時に一度だけ接続**: 作成した [`Database`] ハンドルをプロセス全体で共有する
//!   （ドライバ内部でコネクションプールを持つ）
//! - **起動時の疎通確認**: ドライバは接続を遅延確立するため、`ping` コマンドで
//!   到達性を確認する。到達できなければエラーを返し、呼び出し元はプロセスを終了する
//! - **データベース名**: 接続 URI のパスから決定し、指定がなければ
//!   [`DEFAULT_DATABASE`] を使う

use std::time::Duration;

use async_trait::async_trait;
use mongodb::{Client, Database, bson::doc, options::ClientOptions};

use crate::InfraError;

/// 接続 URI にデータベース名がない場合に使うデータベース名
pub const DEFAULT_DATABASE: &str = "comingsoon";

/// お問い合わせメッセージを格納するコレクション名
pub const CONTACTS_COLLECTION: &str = "contacts";

const APP_NAME: &str = "comingsoon-contact-service";

/// MongoDB に接続し、疎通を確認したうえでデータベースハンドルを返す
///
/// # 引数
///
/// * `uri` - 接続 URI（例: `mongodb://localhost:27017/comingsoon`）
/// * `timeout` - 接続およびサーバー選択のタイムアウト
///
/// # エラー
///
/// URI が不正な場合、またはタイムアウトまでにサーバーへ到達できない場合。
#[tracing::instrument(skip_all, level = "debug")]
pub async fn connect(uri: &str, timeout: Duration) -> Result<Database, InfraError> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some(APP_NAME.to_string());
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    let client = Client::with_options(options)?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    ping(&database).await?;
    tracing::debug!(database = database.name(), "MongoDB への疎通を確認しました");

    Ok(database)
}

async fn ping(database: &Database) -> Result<(), InfraError> {
    database.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// バッキングストアの疎通確認
///
/// Readiness Check から呼び出す。
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn ping(&self) -> Result<(), InfraError>;
}

/// `ping` コマンドで疎通を確認する MongoDB 実装
pub struct MongoDatabaseProbe {
    database: Database,
}

impl MongoDatabaseProbe {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl DatabaseProbe for MongoDatabaseProbe {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn ping(&self) -> Result<(), InfraError> {
        ping(&self.database).await
    }
}
