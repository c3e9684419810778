//! # ヘルスチェックハンドラ
//!
//! - `/` — 稼働確認（プレーンテキスト）
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready` — Readiness Check（MongoDB への疎通を確認）
//!
//! レスポンス型は [`comingsoon_shared::HealthResponse`] / [`comingsoon_shared::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use comingsoon_infra::DatabaseProbe;
use comingsoon_shared::{CheckStatus, HealthResponse, ReadinessResponse};

pub const LIVENESS_MESSAGE: &str = "🚀 Backend API is running";

const READINESS_TIMEOUT: Duration = Duration::from_secs(5);

/// GET /
///
/// ストアの状態に関わらず常に 200 を返す。
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Contact Service のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub probe: Arc<dyn DatabaseProbe>,
}

/// Contact Service の Readiness Check エンドポイント
///
/// MongoDB に ping を送り、成功すれば 200、失敗またはタイムアウトなら 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let database = check_database(state.probe.as_ref()).await;

    let mut checks = HashMap::new();
    checks.insert("database".to_string(), database);
    let response = ReadinessResponse::from_checks(checks);

    let http_status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (http_status, Json(response))
}

/// MongoDB への疎通を ping で確認する（タイムアウト: 5 秒）
async fn check_database(probe: &dyn DatabaseProbe) -> CheckStatus {
    match tokio::time::timeout(READINESS_TIMEOUT, probe.ping()).await {
        Ok(Ok(())) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: database ping failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: database check timed out");
            CheckStatus::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, http::Request, routing::get};
    use comingsoon_infra::mock::MockDatabaseProbe;
    use comingsoon_shared::ReadinessStatus;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    fn create_test_app(probe: MockDatabaseProbe) -> Router {
        Router::new()
            .route("/health/ready", get(readiness_check))
            .with_state(Arc::new(ReadinessState {
                probe: Arc::new(probe),
            }))
    }

    async fn get_ready(sut: Router) -> (StatusCode, ReadinessResponse) {
        let request = Request::builder()
            .uri("/health/ready")
            .body(Body::empty())
            .unwrap();
        let response = sut.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_liveness_稼働メッセージを返す() {
        assert_eq!(liveness().await, "🚀 Backend API is running");
    }

    #[tokio::test]
    async fn test_health_check_healthyを返す() {
        let Json(body) = health_check().await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_readiness_check_疎通できれば200() {
        // When
        let (status, body) = get_ready(create_test_app(MockDatabaseProbe::reachable())).await;

        // Then
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, ReadinessStatus::Ready);
        assert_eq!(body.checks.get("database"), Some(&CheckStatus::Ok));
    }

    #[tokio::test]
    async fn test_readiness_check_疎通できなければ503() {
        // When
        let (status, body) = get_ready(create_test_app(MockDatabaseProbe::unreachable())).await;

        // Then
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, ReadinessStatus::NotReady);
        assert_eq!(body.checks.get("database"), Some(&CheckStatus::Error));
    }
}
