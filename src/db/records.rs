// 電話帳レコードCRUD操作
//
// full_name / phone_number の一意性はUNIQUE制約が保証する。
// 削除は存在確認と削除を1トランザクションで行う。

use crate::common::error::PhonebookError;
use crate::common::types::Record;
use chrono::Utc;
use sqlx::SqlitePool;

/// 氏名でレコードを検索
///
/// # Returns
/// * `Ok(Some(Record))` - レコードが見つかった
/// * `Ok(None)` - レコードが見つからなかった
/// * `Err(PhonebookError)` - 検索失敗
pub async fn find_by_name(
    pool: &SqlitePool,
    full_name: &str,
) -> Result<Option<Record>, PhonebookError> {
    let row = sqlx::query_as::<_, RecordRow>(
        "SELECT full_name, phone_number FROM phonebook_records WHERE full_name = ?",
    )
    .bind(full_name)
    .fetch_optional(pool)
    .await
    .map_err(|e| PhonebookError::Database(format!("Failed to find record by name: {}", e)))?;

    Ok(row.map(RecordRow::into_record))
}

/// 電話番号でレコードを検索
pub async fn find_by_number(
    pool: &SqlitePool,
    phone_number: &str,
) -> Result<Option<Record>, PhonebookError> {
    let row = sqlx::query_as::<_, RecordRow>(
        "SELECT full_name, phone_number FROM phonebook_records WHERE phone_number = ?",
    )
    .bind(phone_number)
    .fetch_optional(pool)
    .await
    .map_err(|e| PhonebookError::Database(format!("Failed to find record by number: {}", e)))?;

    Ok(row.map(RecordRow::into_record))
}

/// レコードを挿入
///
/// 氏名・電話番号いずれかのUNIQUE制約違反は`DuplicateRecord`に変換する。
/// 事前の重複チェックと並行する挿入の競合はここで最終的に防がれる。
///
/// # Returns
/// * `Ok(())` - 挿入成功
/// * `Err(PhonebookError::DuplicateRecord)` - 氏名または電話番号が衝突
/// * `Err(PhonebookError)` - その他の失敗
pub async fn insert(pool: &SqlitePool, record: &Record) -> Result<(), PhonebookError> {
    sqlx::query(
        "INSERT INTO phonebook_records (full_name, phone_number, created_at) VALUES (?, ?, ?)",
    )
    .bind(&record.full_name)
    .bind(&record.phone_number)
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await
    .map_err(|e| {
        if e.to_string().contains("UNIQUE constraint failed") {
            PhonebookError::DuplicateRecord
        } else {
            PhonebookError::Database(format!("Failed to insert record: {}", e))
        }
    })?;

    Ok(())
}

/// 氏名でレコードを削除
///
/// 存在確認と削除を1トランザクションで行う。
///
/// # Returns
/// * `Ok(Some(Record))` - 削除されたレコード
/// * `Ok(None)` - 該当レコードなし
pub async fn delete_by_name(
    pool: &SqlitePool,
    full_name: &str,
) -> Result<Option<Record>, PhonebookError> {
    delete_by_key(pool, "full_name", full_name).await
}

/// 電話番号でレコードを削除
///
/// 削除されたレコードを返すため、呼び出し側は削除対象の氏名を
/// 監査ログへ記録できる。
pub async fn delete_by_number(
    pool: &SqlitePool,
    phone_number: &str,
) -> Result<Option<Record>, PhonebookError> {
    delete_by_key(pool, "phone_number", phone_number).await
}

async fn delete_by_key(
    pool: &SqlitePool,
    column: &'static str,
    value: &str,
) -> Result<Option<Record>, PhonebookError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| PhonebookError::Database(format!("Failed to begin transaction: {}", e)))?;

    let row = sqlx::query_as::<_, RecordRow>(&format!(
        "SELECT full_name, phone_number FROM phonebook_records WHERE {} = ?",
        column
    ))
    .bind(value)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| PhonebookError::Database(format!("Failed to find record: {}", e)))?;

    let Some(row) = row else {
        return Ok(None);
    };

    sqlx::query(&format!("DELETE FROM phonebook_records WHERE {} = ?", column))
        .bind(value)
        .execute(&mut *tx)
        .await
        .map_err(|e| PhonebookError::Database(format!("Failed to delete record: {}", e)))?;

    tx.commit()
        .await
        .map_err(|e| PhonebookError::Database(format!("Failed to commit delete: {}", e)))?;

    Ok(Some(row.into_record()))
}

/// すべてのレコードを挿入順に取得
pub async fn list(pool: &SqlitePool) -> Result<Vec<Record>, PhonebookError> {
    let rows = sqlx::query_as::<_, RecordRow>(
        "SELECT full_name, phone_number FROM phonebook_records ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| PhonebookError::Database(format!("Failed to list records: {}", e)))?;

    Ok(rows.into_iter().map(RecordRow::into_record).collect())
}

// SQLiteからの行取得用の内部型
#[derive(sqlx::FromRow)]
struct RecordRow {
    full_name: String,
    phone_number: String,
}

impl RecordRow {
    fn into_record(self) -> Record {
        Record {
            full_name: self.full_name,
            phone_number: self.phone_number,
        }
    }
}
