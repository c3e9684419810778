//! # Contact Service サーバー
//!
//! 公開予定ページ（Coming Soon）のバックエンド API サーバー。
//!
//! ## 役割
//!
//! - **お問い合わせ受付**: フォームの内容を検証し MongoDB に保存する
//! - **稼働確認**: フロントエンドやロードバランサーからの死活監視に応答する
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │   Browser    │────▶│ Contact Service  │────▶│   MongoDB    │
//! │  (Frontend)  │     │    port: 5000    │     │  (contacts)  │
//! └──────────────┘     └──────────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `MONGO_URI` | No | MongoDB 接続 URI |
//! | `MONGO_CONNECT_TIMEOUT_SECS` | No | 起動時の接続タイムアウト（デフォルト: `5`） |
//! | `FRONTEND_URL` | No | CORS 許可オリジン（デフォルト: `*`） |
//! | `LOG_FORMAT` | No | `json` で JSON ログ |
//! | `RUST_LOG` | No | ログレベル |
//!
//! MongoDB に接続できない場合はリクエストを受け付けずに終了する。
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p comingsoon-contact-service
//!
//! PORT=8080 MONGO_URI=mongodb://db:27017/comingsoon cargo run -p comingsoon-contact-service --release
//! ```

use std::sync::Arc;

use anyhow::Context;
use comingsoon_contact_service::{
    app_builder::{AppDependencies, build_app},
    config::ContactServiceConfig,
};
use comingsoon_domain::clock::SystemClock;
use comingsoon_infra::{
    DatabaseProbe,
    MongoDatabaseProbe,
    mongo,
    repository::{ContactMessageRepository, MongoContactMessageRepository},
};
use comingsoon_shared::observability::TracingConfig;
use tokio::{net::TcpListener, signal};

/// Contact Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("contact-service");
    comingsoon_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "contact-service").entered();

    let config = ContactServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Contact Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // 接続できるまではリスナーを開かない
    let database = mongo::connect(&config.mongo_uri, config.mongo_connect_timeout)
        .await
        .context("MongoDB への接続に失敗しました")?;
    tracing::info!("MongoDB に接続しました");

    let contact_repository: Arc<dyn ContactMessageRepository> = Arc::new(
        MongoContactMessageRepository::new(&database, Arc::new(SystemClock)),
    );
    let database_probe: Arc<dyn DatabaseProbe> = Arc::new(MongoDatabaseProbe::new(database));

    let app = build_app(
        &config.allowed_origin,
        AppDependencies {
            contact_repository,
            database_probe,
        },
    );

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("{addr} にバインドできませんでした"))?;
    tracing::info!("Contact Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Contact Service サーバーを停止しました");
    Ok(())
}

/// Ctrl+C または SIGTERM を待つ
///
/// シグナルハンドラを登録できない場合は、そのシグナルでの停止を諦めて待ち続ける。
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Ctrl+C を受信しました。シャットダウンします"),
            Err(e) => {
                tracing::warn!(error = %e, "Ctrl+C ハンドラを登録できませんでした");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("SIGTERM を受信しました。シャットダウンします");
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM ハンドラを登録できませんでした");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
