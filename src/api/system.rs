//! システムAPI

use axum::Json;
use serde::Serialize;

/// ヘルスチェックレスポンス
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// サービス状態
    pub status: &'static str,
}

/// GET /health - 死活監視
///
/// 認証不要・監査対象外。
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
