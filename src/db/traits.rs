//! Repository traitパターン定義
//!
//! ストア・資格情報解決を抽象化し、テスタビリティを向上させるための
//! trait群。各traitは既存のフリー関数に対応する。

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::common::auth::User;
use crate::common::error::PhonebookError;
use crate::common::types::Record;

// ---------------------------------------------------------------------------
// RecordStore
// ---------------------------------------------------------------------------

/// 電話帳レコードストア
///
/// 一意性不変条件（氏名・電話番号それぞれの一意性）の最終的な強制は
/// ストア実装の責務。挿入の衝突は`DuplicateRecord`を返すこと。
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// 氏名でレコードを検索
    async fn find_by_name(&self, full_name: &str) -> Result<Option<Record>, PhonebookError>;
    /// 電話番号でレコードを検索
    async fn find_by_number(&self, phone_number: &str) -> Result<Option<Record>, PhonebookError>;
    /// レコードを挿入
    async fn insert(&self, record: &Record) -> Result<(), PhonebookError>;
    /// 氏名でレコードを削除（削除されたレコードを返す）
    async fn delete_by_name(&self, full_name: &str) -> Result<Option<Record>, PhonebookError>;
    /// 電話番号でレコードを削除（削除されたレコードを返す）
    async fn delete_by_number(&self, phone_number: &str)
        -> Result<Option<Record>, PhonebookError>;
    /// すべてのレコードを挿入順に取得
    async fn list(&self) -> Result<Vec<Record>, PhonebookError>;
}

/// SQLite実装のRecordStore
#[derive(Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    /// プールからストアを作る
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn find_by_name(&self, full_name: &str) -> Result<Option<Record>, PhonebookError> {
        super::records::find_by_name(&self.pool, full_name).await
    }

    async fn find_by_number(&self, phone_number: &str) -> Result<Option<Record>, PhonebookError> {
        super::records::find_by_number(&self.pool, phone_number).await
    }

    async fn insert(&self, record: &Record) -> Result<(), PhonebookError> {
        super::records::insert(&self.pool, record).await
    }

    async fn delete_by_name(&self, full_name: &str) -> Result<Option<Record>, PhonebookError> {
        super::records::delete_by_name(&self.pool, full_name).await
    }

    async fn delete_by_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<Record>, PhonebookError> {
        super::records::delete_by_number(&self.pool, phone_number).await
    }

    async fn list(&self) -> Result<Vec<Record>, PhonebookError> {
        super::records::list(&self.pool).await
    }
}

// ---------------------------------------------------------------------------
// UserDirectory
// ---------------------------------------------------------------------------

/// ユーザーディレクトリ（提示された資格情報をユーザーに解決する）
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// ユーザー名でユーザーを検索
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, PhonebookError>;
    /// 最終ログイン日時を更新
    async fn update_last_login(&self, id: Uuid) -> Result<(), PhonebookError>;
}

/// SQLite実装のUserDirectory
#[derive(Clone)]
pub struct SqliteUserDirectory {
    pool: SqlitePool,
}

impl SqliteUserDirectory {
    /// プールからディレクトリを作る
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for SqliteUserDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, PhonebookError> {
        super::users::find_by_username(&self.pool, username).await
    }

    async fn update_last_login(&self, id: Uuid) -> Result<(), PhonebookError> {
        super::users::update_last_login(&self.pool, id).await
    }
}
