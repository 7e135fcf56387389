//! 認証API
//!
//! トークン発行（フォームエンコードのユーザー名・パスワード）

use crate::api::error::AppError;
use crate::audit::types::AuditActor;
use crate::common::error::PhonebookError;
use crate::AppState;
use axum::{
    extract::{rejection::FormRejection, State},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

/// トークン発行リクエスト（フォームエンコード）
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    /// ユーザー名
    pub username: String,
    /// パスワード
    pub password: String,
}

/// トークン発行レスポンス
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// JWTアクセストークン
    pub access_token: String,
    /// トークン種別（常に "bearer"）
    pub token_type: String,
}

/// POST /token - トークン発行
///
/// ユーザー名とパスワードで認証し、JWTトークンを発行する。
/// 未知のユーザー名と不一致のパスワードは区別できない401を返す。
///
/// # Arguments
/// * `State(state)` - アプリケーション状態
/// * `payload` - フォームボディ（username, password）
///
/// # Returns
/// * `200 OK` - 発行成功（access_token, token_type)
/// * `400 Bad Request` - フォームボディ不正
/// * `401 Unauthorized` - 認証失敗
pub async fn issue_token(
    State(state): State<AppState>,
    payload: Result<Form<TokenRequest>, FormRejection>,
) -> Result<Response, Response> {
    let Form(request) = payload.map_err(|e| {
        AppError(PhonebookError::InvalidRequest(format!(
            "Invalid form body: {}",
            e
        )))
        .into_response()
    })?;

    // 監査上の操作者は、成否にかかわらず試行されたユーザー名
    let attempted = request.username.clone();

    match authenticate(&state, &request).await {
        Ok(token) => {
            let mut response = Json(token).into_response();
            response
                .extensions_mut()
                .insert(AuditActor { username: attempted });
            Ok(response)
        }
        Err(err) => {
            let mut response = AppError(err).into_response();
            response
                .extensions_mut()
                .insert(AuditActor { username: attempted });
            Err(response)
        }
    }
}

async fn authenticate(
    state: &AppState,
    request: &TokenRequest,
) -> Result<TokenResponse, PhonebookError> {
    let user = state
        .users
        .find_by_username(&request.username)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find user: {}", e);
            e
        })?
        .ok_or_else(|| {
            PhonebookError::Authentication("Invalid username or password".to_string())
        })?;

    let is_valid = crate::auth::password::verify_password(&request.password, &user.password_hash)
        .map_err(|e| {
            tracing::error!("Failed to verify password: {}", e);
            e
        })?;

    if !is_valid {
        return Err(PhonebookError::Authentication(
            "Invalid username or password".to_string(),
        ));
    }

    // エラーでもログイン自体は成功させる
    if let Err(e) = state.users.update_last_login(user.id).await {
        tracing::warn!("Failed to update last login: {}", e);
    }

    let token = crate::auth::jwt::create_jwt(
        &user.username,
        user.role,
        &state.jwt_secret,
        state.token_ttl_minutes,
    )?;

    tracing::info!("Issued token for user '{}'", user.username);

    Ok(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    })
}
