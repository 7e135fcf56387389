//! サーバー初期化ロジック
//!
//! データベース接続、マイグレーション、ユーザーシード、監査ログ
//! ライター起動など、サーバー起動に必要なコンポーネントの初期化を担当する。

use crate::audit::sink::FileAuditSink;
use crate::audit::writer::{AuditLogWriter, AuditLogWriterConfig};
use crate::common::error::PhonebookError;
use crate::config::{AuditConfig, AuthConfig};
use crate::db::traits::{SqliteRecordStore, SqliteUserDirectory};
use crate::{auth, config, db, AppState};
use std::sync::Arc;
use tracing::info;

/// サーバー初期化を実行する
///
/// DB接続、マイグレーション、初回起動時のユーザーシード、監査ログ
/// ライターの起動を行い、`AppState`を返す。
///
/// # Returns
/// * `Ok(AppState)` - 初期化済みアプリケーション状態
/// * `Err(PhonebookError)` - 初期化失敗
pub async fn initialize() -> Result<AppState, PhonebookError> {
    info!("phonebookd v{}", env!("CARGO_PKG_VERSION"));

    // データベース接続プールを最初に作成（他コンポーネントが依存）
    let database_url = config::database_url();
    let db_pool = db::migrations::initialize_database(&database_url).await?;

    // 初回起動時は既定の2ユーザーをシード
    auth::bootstrap::ensure_default_users(&db_pool).await?;

    let auth_config = AuthConfig::from_env();

    // 監査ログライターを起動
    let audit_config = AuditConfig::from_env();
    let sink = FileAuditSink::open(&audit_config.log_path).await?;
    let audit = AuditLogWriter::new(Box::new(sink), AuditLogWriterConfig::default());
    info!("Audit log: {}", audit_config.log_path.display());

    Ok(AppState {
        db_pool: db_pool.clone(),
        records: Arc::new(SqliteRecordStore::new(db_pool.clone())),
        users: Arc::new(SqliteUserDirectory::new(db_pool)),
        jwt_secret: auth_config.jwt_secret,
        token_ttl_minutes: auth_config.token_ttl_minutes,
        audit,
    })
}
