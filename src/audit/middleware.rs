//! 監査ログミドルウェア
//!
//! 監査対象の操作1回につき、最終結果を反映したレコードをちょうど1件
//! 送信する。操作者は認証ミドルウェア（またはログインハンドラー）が
//! レスポンス拡張に格納した`AuditActor`から取り、解決できなければ
//! "unknown" とする。追加情報は`AuditDetail`拡張から取る。

use crate::audit::types::{AuditActor, AuditDetail, AuditRecord};
use crate::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use tracing::trace;

/// (メソッド, パス) から監査上の操作名を引く
///
/// 監査対象外のパス（ヘルスチェック等）はNoneを返す。
fn action_for(method: &Method, path: &str) -> Option<&'static str> {
    match (method.as_str(), path) {
        ("POST", "/token") => Some("login"),
        ("GET", "/PhoneBook/list") => Some("list"),
        ("POST", "/PhoneBook/add") => Some("add"),
        ("PUT", "/PhoneBook/deleteByName") => Some("deleteByName"),
        ("PUT", "/PhoneBook/deleteByNumber") => Some("deleteByNumber"),
        _ => None,
    }
}

/// 監査ログミドルウェア
pub async fn audit_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let Some(action) = action_for(&method, &path) else {
        return next.run(request).await;
    };

    let response = next.run(request).await;

    let username = response
        .extensions()
        .get::<AuditActor>()
        .map(|actor| actor.username.clone())
        .unwrap_or_else(|| "unknown".to_string());
    let detail = response
        .extensions()
        .get::<AuditDetail>()
        .map(|detail| detail.0.clone());

    trace!(
        action = action,
        username = %username,
        status = response.status().as_u16(),
        "audit record captured"
    );

    state.audit.send(AuditRecord {
        username,
        action: action.to_string(),
        detail,
    });

    response
}
