//! # Contact Service アプリケーション構築
//!
//! DI（リポジトリ・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use comingsoon_infra::{DatabaseProbe, repository::ContactMessageRepository};
use comingsoon_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::AllowedOrigin,
    handler::{
        ContactState,
        ReadinessState,
        health_check,
        liveness,
        readiness_check,
        some_route,
        submit_contact,
    },
    usecase::ContactUseCaseImpl,
};

/// ルーター構築に必要なインフラ依存
///
/// 本番では MongoDB 実装、テストではインメモリ実装を渡す。
pub struct AppDependencies {
    pub contact_repository: Arc<dyn ContactMessageRepository>,
    pub database_probe:     Arc<dyn DatabaseProbe>,
}

/// DI コンテナの構築とルーター定義を行う
///
/// インフラ初期化済みの依存を受け取り、ユースケース → State → Router の
/// 順に組み立てる。
pub fn build_app(allowed_origin: &AllowedOrigin, deps: AppDependencies) -> Router {
    let contact_state = Arc::new(ContactState {
        usecase: Arc::new(ContactUseCaseImpl::new(deps.contact_repository)),
    });
    let readiness_state = Arc::new(ReadinessState {
        probe: deps.database_probe,
    });

    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health_check))
        .route("/api/some-route", get(some_route))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/api/contact", post(submit_contact))
        .with_state(contact_state)
        // レイヤー順序（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（クライアント提供値があればそれを使う）
        // 2. TraceLayer: スパンに request_id を含める
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 4. CanonicalLogLineLayer: リクエスト完了時に 1 行サマリログを出力
        // 5. CorsLayer: プリフライトへの応答と CORS ヘッダーの付与
        .layer(cors_layer(allowed_origin))
        .layer(CanonicalLogLineLayer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

/// 許可オリジン以外からのリクエストには CORS ヘッダーを付けない
///
/// 指定オリジンは、リクエストの `Origin` が一致した場合にのみ返す。
fn cors_layer(allowed_origin: &AllowedOrigin) -> CorsLayer {
    let allow_origin = match allowed_origin {
        AllowedOrigin::Any => AllowOrigin::any(),
        AllowedOrigin::Exact(origin) => AllowOrigin::list([origin.clone()]),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}
