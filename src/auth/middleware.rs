// 認証・認可ミドルウェア実装

use crate::api::error::AppError;
use crate::audit::types::AuditActor;
use crate::common::auth::{Claims, UserRole};
use crate::common::error::PhonebookError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// JWT認証ミドルウェア
///
/// Authorizationヘッダーから "Bearer {token}" を抽出してJWT検証を行う。
/// ヘッダー欠落・形式不正・署名不一致・期限切れはすべて401で閉じる。
/// ロール評価より必ず先に実行される（外側のレイヤーとして配線する）。
///
/// # Arguments
/// * `State(jwt_secret)` - JWT署名検証用のシークレットキー
/// * `request` - HTTPリクエスト
/// * `next` - 次のミドルウェア/ハンドラー
///
/// # Returns
/// * `Ok(Response)` - 認証成功。requestにClaims、responseにAuditActorを追加
/// * `Err(Response)` - 認証失敗、401 Unauthorized
pub async fn jwt_auth_middleware(
    State(jwt_secret): State<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError(PhonebookError::Jwt(
                "Missing Authorization header".to_string(),
            ))
            .into_response()
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError(PhonebookError::Jwt(
            "Invalid Authorization header format".to_string(),
        ))
        .into_response()
    })?;

    let claims = crate::auth::jwt::verify_jwt(token, &jwt_secret).map_err(|e| {
        tracing::warn!("JWT verification failed: {}", e);
        AppError(e).into_response()
    })?;

    // 検証済みのClaimsをrequestの拡張データに格納
    let username = claims.sub.clone();
    request.extensions_mut().insert(claims);

    // 監査ミドルウェア向けに、解決した操作者をレスポンスへ引き継ぐ
    // （ロール拒否やハンドラーのエラー応答にも付与される）
    let mut response = next.run(request).await;
    response.extensions_mut().insert(AuditActor { username });
    Ok(response)
}

/// エンドポイントが要求するロール集合
#[derive(Debug, Clone, Copy)]
pub struct RequiredRoles(pub &'static [UserRole]);

impl RequiredRoles {
    /// 読み取り操作（ReadまたはReadWrite）
    pub const READ: Self = Self(&[UserRole::Read, UserRole::ReadWrite]);

    /// 変更操作（ReadWriteのみ）
    pub const READ_WRITE: Self = Self(&[UserRole::ReadWrite]);

    /// ロールが集合に含まれるか
    pub fn allows(&self, role: UserRole) -> bool {
        self.0.contains(&role)
    }
}

/// ロール検査ミドルウェア
///
/// 認証ミドルウェアが格納したClaimsのロールが要求集合に含まれることを
/// 検査する。含まれない場合は403 Forbidden。
///
/// # Arguments
/// * `State(required)` - このルートグループが要求するロール集合
/// * `request` - HTTPリクエスト（Claims拡張を含むこと）
/// * `next` - 次のミドルウェア/ハンドラー
pub async fn require_role_middleware(
    State(required): State<RequiredRoles>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let claims = request.extensions().get::<Claims>().ok_or_else(|| {
        // 認証レイヤーを通さず配線された場合は閉じて失敗させる
        AppError(PhonebookError::Jwt(
            "Missing authentication context".to_string(),
        ))
        .into_response()
    })?;

    if !required.allows(claims.role) {
        tracing::info!(
            "Role check failed: user={} role={:?}",
            claims.sub,
            claims.role
        );
        return Err(AppError(PhonebookError::Authorization(format!(
            "Role {:?} is not permitted for this operation",
            claims.role
        )))
        .into_response());
    }

    Ok(next.run(request).await)
}
