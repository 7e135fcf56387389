//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! すべてのエラーはハンドラー境界で回収され、`status_code()`に従って
//! HTTPステータスコードへ変換される。クライアント向けメッセージは
//! `external_message()`が返す固定文言のみを使用し、内部詳細は
//! サーバーログにのみ出力する。

use crate::validation::ValidationError;
use axum::http::StatusCode;
use thiserror::Error;

/// Phonebookサービスのエラー型
#[derive(Debug, Error)]
pub enum PhonebookError {
    /// 入力バリデーションエラー（フィールドごとに最初に失敗したルールを保持）
    #[error("Validation failed: {}", join_validation_errors(.0))]
    Validation(Vec<ValidationError>),

    /// レコード重複（氏名または電話番号が既存レコードと衝突）
    #[error("Duplicate record")]
    DuplicateRecord,

    /// レコードが見つからない
    #[error("Record not found: {0}")]
    NotFound(String),

    /// リクエスト形式不正（ボディ・クエリパラメータの解析失敗）
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 認証エラー（ログイン失敗）
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// JWTエラー（トークン欠落・不正・期限切れ）
    #[error("JWT error: {0}")]
    Jwt(String),

    /// 認可エラー（ロール不足）
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// データベースエラー
    #[error("Database error: {0}")]
    Database(String),

    /// パスワードハッシュエラー
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// 内部エラー
    #[error("Internal error: {0}")]
    Internal(String),
}

fn join_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl PhonebookError {
    /// Returns a safe error message for external clients.
    ///
    /// This method returns a fixed message that does not expose internal
    /// details. For debugging, use the `Display` implementation which
    /// includes full error details - but only in server logs.
    ///
    /// バリデーションエラーの応答ボディはフィールドごとのメッセージ一覧で
    /// 構成されるため、このメソッドは使用されない（`api::error`参照）。
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Request validation failed",
            Self::DuplicateRecord => "Person already exists in the database",
            Self::NotFound(_) => "Person not found in the database",
            Self::InvalidRequest(_) => "Malformed request",
            Self::Authentication(_) => "Invalid username or password",
            Self::Jwt(_) => "Could not validate credentials",
            Self::Authorization(_) => "Insufficient privileges",
            Self::Database(_) => "Database error",
            Self::PasswordHash(_) => "Internal server error",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateRecord => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::Jwt(_) => StatusCode::UNAUTHORIZED,
            Self::Authorization(_) => StatusCode::FORBIDDEN,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type alias
pub type PbResult<T> = Result<T, PhonebookError>;
