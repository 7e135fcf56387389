//! 氏名バリデーション
//!
//! 許可文字は英字・空白・ピリオド・カンマ・アポストロフィ（ASCIIと
//! U+2019の両方）・ハイフン。空白区切りで最大3語、1語あたりハイフンは
//! 最大1個、アポストロフィの連続は不可。

use super::{run_rules, Rule, ValidationError, ValidationKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// レスポンスボディで使用するフィールド名
pub const FIELD: &str = "full_name";

/// 空白区切りの語数上限
const MAX_PARTS: usize = 3;

/// 1語あたりのハイフン上限
const MAX_HYPHENS_PER_PART: usize = 1;

/// 許可文字集合（空文字列は不一致）
static CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z.,'’ -]+$").expect("valid name charset regex"));

/// アポストロフィ連続（ASCII/U+2019の任意の組み合わせ）
static DOUBLE_APOSTROPHE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"['’]{2}").expect("valid apostrophe regex"));

fn check_charset(input: &str) -> Option<ValidationKind> {
    if CHARSET.is_match(input) {
        None
    } else {
        Some(ValidationKind::InvalidCharacters)
    }
}

fn check_consecutive_apostrophes(input: &str) -> Option<ValidationKind> {
    if DOUBLE_APOSTROPHE.is_match(input) {
        Some(ValidationKind::ConsecutiveApostrophes)
    } else {
        None
    }
}

fn check_part_count(input: &str) -> Option<ValidationKind> {
    if input.split_whitespace().count() > MAX_PARTS {
        Some(ValidationKind::TooManyParts)
    } else {
        None
    }
}

fn check_hyphens_per_part(input: &str) -> Option<ValidationKind> {
    if input
        .split_whitespace()
        .any(|part| part.matches('-').count() > MAX_HYPHENS_PER_PART)
    {
        Some(ValidationKind::TooManyHyphens)
    } else {
        None
    }
}

static RULES: [Rule; 4] = [
    Rule {
        name: "charset",
        check: check_charset,
    },
    Rule {
        name: "consecutive_apostrophes",
        check: check_consecutive_apostrophes,
    },
    Rule {
        name: "part_count",
        check: check_part_count,
    },
    Rule {
        name: "hyphens_per_part",
        check: check_hyphens_per_part,
    },
];

/// 氏名ルール列（宣言順に評価される）
pub fn rules() -> &'static [Rule] {
    &RULES
}

fn message_for(kind: ValidationKind) -> &'static str {
    match kind {
        ValidationKind::InvalidCharacters => "Invalid characters in name",
        ValidationKind::ConsecutiveApostrophes => "Consecutive apostrophes are not allowed",
        ValidationKind::TooManyParts => "Name has too many parts",
        ValidationKind::TooManyHyphens => "Name has too many hyphens",
        _ => "Invalid name",
    }
}

/// 氏名を検証する
///
/// 受理時は入力をそのまま返す（正規化しない）。
pub fn validate(input: &str) -> Result<&str, ValidationError> {
    run_rules(FIELD, &RULES, message_for, input)
}
