//! 電話帳API
//!
//! 一覧・追加・氏名による削除・電話番号による削除。
//! 各変更操作は 認可 → バリデーション → 一意性/存在チェック → 変更 の
//! 順で処理し、最初の失敗で打ち切る（認可はミドルウェアが先に行う）。

use crate::api::error::AppError;
use crate::audit::types::AuditDetail;
use crate::common::error::PhonebookError;
use crate::common::types::Record;
use crate::validation;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// 追加リクエスト
#[derive(Debug, Deserialize)]
pub struct PersonRequest {
    /// 氏名
    pub full_name: String,
    /// 電話番号
    pub phone_number: String,
}

/// 成功メッセージレスポンス
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// 結果メッセージ
    pub message: String,
}

/// deleteByNameのクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct DeleteByNameParams {
    /// 削除対象の氏名
    pub full_name: String,
}

/// deleteByNumberのクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct DeleteByNumberParams {
    /// 削除対象の電話番号
    pub phone_number: String,
}

/// GET /PhoneBook/list - 全レコード取得
///
/// バリデーション・一意性チェックは行わず、挿入順の全レコードを返す。
///
/// # Returns
/// * `200 OK` - レコード配列
/// * `401 / 403` - 認証・認可失敗（ミドルウェア）
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Record>>, Response> {
    let records = state
        .records
        .list()
        .await
        .map_err(|e| AppError(e).into_response())?;
    Ok(Json(records))
}

/// POST /PhoneBook/add - レコード追加
///
/// 氏名・電話番号の両方を検証し、どちらかの値が既存レコードと衝突する
/// 場合は重複として拒否する。
///
/// # Returns
/// * `200 OK` - 追加成功
/// * `400 Bad Request` - バリデーション失敗または重複
/// * `401 / 403` - 認証・認可失敗（ミドルウェア）
pub async fn add(
    State(state): State<AppState>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, Response> {
    let Json(request) = payload.map_err(|e| {
        AppError(PhonebookError::InvalidRequest(format!(
            "Invalid request body: {}",
            e
        )))
        .into_response()
    })?;

    validation::validate_person(&request.full_name, &request.phone_number)
        .map_err(|errors| AppError(PhonebookError::Validation(errors)).into_response())?;

    // 両フィールドの一意性チェック（競合時の最終防衛はストアのUNIQUE制約）
    let name_taken = state
        .records
        .find_by_name(&request.full_name)
        .await
        .map_err(|e| AppError(e).into_response())?
        .is_some();
    let number_taken = state
        .records
        .find_by_number(&request.phone_number)
        .await
        .map_err(|e| AppError(e).into_response())?
        .is_some();
    if name_taken || number_taken {
        return Err(AppError(PhonebookError::DuplicateRecord).into_response());
    }

    let record = Record {
        full_name: request.full_name,
        phone_number: request.phone_number,
    };
    state
        .records
        .insert(&record)
        .await
        .map_err(|e| AppError(e).into_response())?;

    tracing::info!("Added phonebook record for '{}'", record.full_name);

    Ok(Json(MessageResponse {
        message: "Person added successfully".to_string(),
    }))
}

/// PUT /PhoneBook/deleteByName - 氏名でレコード削除
///
/// # Returns
/// * `200 OK` - 削除成功
/// * `400 Bad Request` - 氏名のバリデーション失敗
/// * `404 Not Found` - 該当レコードなし（再削除も同様に404）
/// * `401 / 403` - 認証・認可失敗（ミドルウェア）
pub async fn delete_by_name(
    State(state): State<AppState>,
    params: Result<Query<DeleteByNameParams>, QueryRejection>,
) -> Result<Json<MessageResponse>, Response> {
    let Query(params) = params.map_err(|e| {
        AppError(PhonebookError::InvalidRequest(format!(
            "Invalid query parameters: {}",
            e
        )))
        .into_response()
    })?;

    validation::name::validate(&params.full_name)
        .map_err(|e| AppError(PhonebookError::Validation(vec![e])).into_response())?;

    let deleted = state
        .records
        .delete_by_name(&params.full_name)
        .await
        .map_err(|e| AppError(e).into_response())?;

    if deleted.is_none() {
        return Err(AppError(PhonebookError::NotFound(format!(
            "full_name={}",
            params.full_name
        )))
        .into_response());
    }

    tracing::info!("Deleted phonebook record by name");

    Ok(Json(MessageResponse {
        message: "Person deleted successfully".to_string(),
    }))
}

/// PUT /PhoneBook/deleteByNumber - 電話番号でレコード削除
///
/// 成功時は削除されたレコードの氏名を監査ログの追加情報として残す
/// （deleteByNameとは対称でない、意図された差分）。
///
/// # Returns
/// * `200 OK` - 削除成功
/// * `400 Bad Request` - 電話番号のバリデーション失敗
/// * `404 Not Found` - 該当レコードなし
/// * `401 / 403` - 認証・認可失敗（ミドルウェア）
pub async fn delete_by_number(
    State(state): State<AppState>,
    params: Result<Query<DeleteByNumberParams>, QueryRejection>,
) -> Result<Response, Response> {
    let Query(params) = params.map_err(|e| {
        AppError(PhonebookError::InvalidRequest(format!(
            "Invalid query parameters: {}",
            e
        )))
        .into_response()
    })?;

    validation::phone::validate(&params.phone_number)
        .map_err(|e| AppError(PhonebookError::Validation(vec![e])).into_response())?;

    let deleted = state
        .records
        .delete_by_number(&params.phone_number)
        .await
        .map_err(|e| AppError(e).into_response())?
        .ok_or_else(|| {
            AppError(PhonebookError::NotFound(format!(
                "phone_number={}",
                params.phone_number
            )))
            .into_response()
        })?;

    tracing::info!("Deleted phonebook record for '{}' by number", deleted.full_name);

    let mut response = Json(MessageResponse {
        message: "Person deleted successfully".to_string(),
    })
    .into_response();
    response
        .extensions_mut()
        .insert(AuditDetail(format!("name: {}", deleted.full_name)));
    Ok(response)
}
