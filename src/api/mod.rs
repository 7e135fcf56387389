//! REST APIハンドラーとルーター組み立て

/// エラーレスポンス型
pub mod error;

/// 認証API（トークン発行）
pub mod auth;

/// 電話帳API
pub mod phonebook;

/// システムAPI（ヘルスチェック）
pub mod system;

use crate::auth::middleware::{jwt_auth_middleware, require_role_middleware, RequiredRoles};
use crate::AppState;
use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

/// アプリケーションのルーターを組み立てる
///
/// レイヤーは外側から 監査 → JWT認証 → ロール検査 → ハンドラー の順に
/// 実行される。認証失敗（401）は必ずロール評価（403）より先に報告される。
pub fn create_app(state: AppState) -> Router {
    // 読み取り操作: ReadまたはReadWrite
    let read_routes = Router::new()
        .route("/PhoneBook/list", get(phonebook::list))
        .route_layer(axum_middleware::from_fn_with_state(
            RequiredRoles::READ,
            require_role_middleware,
        ));

    // 変更操作: ReadWriteのみ
    let write_routes = Router::new()
        .route("/PhoneBook/add", post(phonebook::add))
        .route("/PhoneBook/deleteByName", put(phonebook::delete_by_name))
        .route("/PhoneBook/deleteByNumber", put(phonebook::delete_by_number))
        .route_layer(axum_middleware::from_fn_with_state(
            RequiredRoles::READ_WRITE,
            require_role_middleware,
        ));

    let protected = read_routes
        .merge(write_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.jwt_secret.clone(),
            jwt_auth_middleware,
        ));

    Router::new()
        .route("/token", post(auth::issue_token))
        .route("/health", get(system::health))
        .merge(protected)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            crate::audit::middleware::audit_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
