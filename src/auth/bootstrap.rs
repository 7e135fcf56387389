//! 初回起動時のユーザーシード
//!
//! ユーザーテーブルが空のとき、読み取り専用ユーザーと読み書きユーザーを
//! 1人ずつ作成する。パスワードは環境変数で差し替えられる。

use crate::auth::password::hash_password;
use crate::common::auth::UserRole;
use crate::common::error::PhonebookError;
use crate::db;

/// 読み取り専用ユーザーのデフォルト資格情報
const DEFAULT_READ_USER: (&str, &str) = ("readuser", "readpassword");

/// 読み書きユーザーのデフォルト資格情報
const DEFAULT_RW_USER: (&str, &str) = ("rwuser", "rwpassword");

/// 初回起動時に既定の2ユーザーを作成する
///
/// ユーザーが既に存在する場合は何もしない。
///
/// # Environment Variables
/// * `PHONEBOOKD_READ_USERNAME` / `PHONEBOOKD_READ_PASSWORD` - 読み取りユーザー
/// * `PHONEBOOKD_RW_USERNAME` / `PHONEBOOKD_RW_PASSWORD` - 読み書きユーザー
///
/// # Returns
/// * `Ok(())` - 処理成功（シード済みか、シード不要）
/// * `Err(PhonebookError)` - 作成失敗
pub async fn ensure_default_users(pool: &sqlx::SqlitePool) -> Result<(), PhonebookError> {
    if !db::users::is_empty(pool).await? {
        tracing::debug!("Users already exist, skipping user seeding");
        return Ok(());
    }

    tracing::info!("First boot detected, seeding default users");

    seed_user(
        pool,
        "PHONEBOOKD_READ_USERNAME",
        "PHONEBOOKD_READ_PASSWORD",
        DEFAULT_READ_USER,
        UserRole::Read,
    )
    .await?;

    seed_user(
        pool,
        "PHONEBOOKD_RW_USERNAME",
        "PHONEBOOKD_RW_PASSWORD",
        DEFAULT_RW_USER,
        UserRole::ReadWrite,
    )
    .await?;

    Ok(())
}

async fn seed_user(
    pool: &sqlx::SqlitePool,
    username_var: &str,
    password_var: &str,
    default: (&str, &str),
    role: UserRole,
) -> Result<(), PhonebookError> {
    let username = std::env::var(username_var).unwrap_or_else(|_| default.0.to_string());
    let password = match std::env::var(password_var) {
        Ok(p) if !p.is_empty() => p,
        _ => {
            tracing::warn!(
                "{} not set, using the default password for user '{}'",
                password_var,
                username
            );
            default.1.to_string()
        }
    };

    let password_hash = hash_password(&password)?;

    match db::users::create(pool, &username, &password_hash, role).await {
        Ok(user) => {
            tracing::info!("Seeded user '{}' with role {:?}", user.username, role);
            Ok(())
        }
        Err(PhonebookError::Database(ref e)) if e.contains("already exists") => {
            tracing::warn!("User '{}' already exists, skipping", username);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to seed user '{}': {}", username, e);
            Err(e)
        }
    }
}
