// JWT生成と検証（jsonwebtoken実装）

use crate::common::auth::{Claims, UserRole};
use crate::common::error::PhonebookError;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

/// JWTトークンを生成
///
/// # Arguments
/// * `username` - ユーザー名（subクレームに格納）
/// * `role` - ユーザーロール
/// * `secret` - JWTシークレットキー
/// * `ttl_minutes` - 有効期限（分）
///
/// # Returns
/// * `Ok(String)` - JWTトークン（3つのドット区切り部分）
/// * `Err(PhonebookError)` - 生成失敗
pub fn create_jwt(
    username: &str,
    role: UserRole,
    secret: &str,
    ttl_minutes: i64,
) -> Result<String, PhonebookError> {
    let expiration = Utc::now()
        .checked_add_signed(chrono::Duration::minutes(ttl_minutes))
        .ok_or_else(|| PhonebookError::Jwt("Failed to calculate expiration time".to_string()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: username.to_string(),
        role,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| PhonebookError::Jwt(format!("Failed to create JWT: {}", e)))
}

/// JWTトークンを検証
///
/// # Arguments
/// * `token` - 検証するJWTトークン
/// * `secret` - JWTシークレットキー
///
/// # Returns
/// * `Ok(Claims)` - 検証済みクレーム
/// * `Err(PhonebookError)` - 検証失敗（無効なトークン、期限切れ、鍵不一致など）
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, PhonebookError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| PhonebookError::Jwt(format!("Failed to verify JWT: {}", e)))
}
