//! 入力バリデーションエンジン
//!
//! 氏名・電話番号それぞれを、宣言順に評価される名前付きルール列として
//! 検証する。最初に失敗したルールの種別が報告され、以降のルールは
//! 評価されない（文字種チェックを通らない入力が構造チェックへ到達する
//! ことはない）。受理時は入力をそのまま返し、整形・正規化は一切行わない。

/// 氏名バリデーション
pub mod name;

/// 電話番号バリデーション
pub mod phone;

use serde::Serialize;
use thiserror::Error;

/// 拒否理由の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationKind {
    /// 許可されない文字を含む
    InvalidCharacters,
    /// アポストロフィが連続している
    ConsecutiveApostrophes,
    /// 空白区切りの語が多すぎる
    TooManyParts,
    /// 1語内のハイフンが多すぎる
    TooManyHyphens,
    /// 数字の個数が範囲外
    DigitCountOutOfRange,
    /// どの受理パターンにも一致しない
    UnrecognizedFormat,
}

/// バリデーションエラー
///
/// フィールド名・拒否種別・利用者向けメッセージを保持する。
/// 表示形式はレスポンスボディの `"<field>: <message>"` に一致する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// 対象フィールド名
    pub field: &'static str,
    /// 拒否種別
    pub kind: ValidationKind,
    /// 利用者向けメッセージ
    pub message: &'static str,
}

/// 名前付きバリデーションルール
///
/// `check` は失敗時に拒否種別を返す純粋な述語。ルール列は
/// `name::rules()` / `phone::rules()` から取得でき、個別にテストできる。
pub struct Rule {
    /// ルール名（診断・テスト用）
    pub name: &'static str,
    /// 失敗時に拒否種別を返す述語
    pub check: fn(&str) -> Option<ValidationKind>,
}

/// ルール列を宣言順に評価し、最初の失敗を報告する
fn run_rules<'a>(
    field: &'static str,
    rules: &[Rule],
    message_for: fn(ValidationKind) -> &'static str,
    input: &'a str,
) -> Result<&'a str, ValidationError> {
    for rule in rules {
        if let Some(kind) = (rule.check)(input) {
            return Err(ValidationError {
                field,
                kind,
                message: message_for(kind),
            });
        }
    }
    Ok(input)
}

/// 氏名と電話番号をまとめて検証する（Add用）
///
/// 各フィールドは内部で最初の失敗のみ報告するが、フィールド間では
/// 両方のエラーをフィールド順に収集して返す。
pub fn validate_person(
    full_name: &str,
    phone_number: &str,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    if let Err(e) = name::validate(full_name) {
        errors.push(e);
    }
    if let Err(e) = phone::validate(phone_number) {
        errors.push(e);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
