//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables and typed
//! config structs for the auth and audit subsystems.

use std::path::PathBuf;

/// Get an environment variable with a default value
///
/// # Arguments
/// * `name` - The environment variable name
/// * `default` - The default value to return if it is not set
pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns the default when the variable is unset or fails to parse.
///
/// # Arguments
/// * `name` - The environment variable name
/// * `default` - The default value
pub fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// データベースURLを取得（`PHONEBOOKD_DATABASE_URL`、デフォルトはカレントのphonebook.db）
pub fn database_url() -> String {
    env_or("PHONEBOOKD_DATABASE_URL", "sqlite:phonebook.db")
}

/// 認証設定
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT署名鍵
    pub jwt_secret: String,
    /// トークン有効期限（分）
    pub token_ttl_minutes: i64,
}

impl AuthConfig {
    /// 環境変数から認証設定を読み込む
    ///
    /// `PHONEBOOKD_JWT_SECRET` が未設定のときはランダムな鍵を生成する
    /// （再起動すると既存トークンは無効になる）。
    pub fn from_env() -> Self {
        let jwt_secret = match std::env::var("PHONEBOOKD_JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!(
                    "PHONEBOOKD_JWT_SECRET not set, generating an ephemeral secret \
                     (existing tokens will not survive a restart)"
                );
                crate::auth::generate_random_token(64)
            }
        };

        Self {
            jwt_secret,
            token_ttl_minutes: env_parse("PHONEBOOKD_TOKEN_TTL_MINUTES", 30),
        }
    }
}

/// 監査ログ設定
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// 監査ログファイルのパス
    pub log_path: PathBuf,
}

impl AuditConfig {
    /// 環境変数から監査ログ設定を読み込む（`PHONEBOOKD_AUDIT_LOG`）
    pub fn from_env() -> Self {
        Self {
            log_path: PathBuf::from(env_or("PHONEBOOKD_AUDIT_LOG", "audit.log")),
        }
    }
}
