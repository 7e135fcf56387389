//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング。レスポンスボディは
//! `{"detail": ...}` 形式で、バリデーションエラーのみ
//! `"<field>: <message>"` の一覧、それ以外は固定文言の文字列になる。
//! 変換時に内部詳細を`AuditDetail`としてレスポンス拡張へ格納し、
//! 監査ミドルウェアが失敗理由を記録できるようにする。

use crate::audit::types::AuditDetail;
use crate::common::error::PhonebookError;
use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub PhonebookError);

impl From<PhonebookError> for AppError {
    fn from(err: PhonebookError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();

        let detail = match &self.0 {
            PhonebookError::Validation(errors) => {
                json!(errors.iter().map(|e| e.to_string()).collect::<Vec<_>>())
            }
            other => json!(other.external_message()),
        };

        let audit_detail = AuditDetail(self.0.to_string());

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else {
            tracing::debug!("Request rejected: {}", self.0);
        }

        let mut response = (status, Json(json!({ "detail": detail }))).into_response();
        response.extensions_mut().insert(audit_detail);
        response
    }
}
