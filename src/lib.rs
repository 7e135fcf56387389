//! Phonebook record service
//!
//! 入力バリデーション・認証/認可・監査ログ付きの電話帳HTTPサーバー

#![warn(missing_docs)]

/// 共通型定義（ドメイン型・認証型・エラー型）
pub mod common;

/// REST APIハンドラー
pub mod api;

/// 入力バリデーションエンジン（氏名・電話番号）
pub mod validation;

/// 認証・認可機能
pub mod auth;

/// 監査ログシステム
pub mod audit;

/// データベースアクセス
pub mod db;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// サーバー初期化
pub mod bootstrap;

/// axumサーバー起動・シャットダウン
pub mod server;

/// CLIインターフェース
pub mod cli;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// データベース接続プール
    pub db_pool: sqlx::SqlitePool,
    /// 電話帳レコードストア
    pub records: Arc<dyn db::traits::RecordStore>,
    /// ユーザーディレクトリ（資格情報の解決）
    pub users: Arc<dyn db::traits::UserDirectory>,
    /// JWT秘密鍵
    pub jwt_secret: String,
    /// トークン有効期限（分）
    pub token_ttl_minutes: i64,
    /// 監査ログライター
    pub audit: audit::writer::AuditLogWriter,
}
