//! 電話番号バリデーション
//!
//! 許可文字チェック → 数字個数チェック（5〜15桁）→ 構造パターン照合の
//! 順で評価する。構造パターンは6種の独立した受理形式のいずれかに
//! 一致すればよい（any-match、パターン同士の重複は許容）。
//!
//! 国際形式は元仕様では国番号直後の数字継続を否定先読みで禁止して
//! いたが、ここでは「国番号の後に区切り文字が1つ以上必要」という
//! 等価な形で表現している。

use super::{run_rules, Rule, ValidationError, ValidationKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// レスポンスボディで使用するフィールド名
pub const FIELD: &str = "phone_number";

/// 数字個数の下限
const MIN_DIGITS: usize = 5;

/// 数字個数の上限
const MAX_DIGITS: usize = 15;

/// 許可文字集合（空文字列は不一致）
static CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+\d(). -]+$").expect("valid phone charset regex"));

/// 内線番号: ちょうど5桁の数字のみ
static EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}$").expect("valid extension regex"));

/// 北米形式: 任意の+1/1プレフィクス + 市外局番（先頭2-9、括弧可）+
/// 3桁 + 4桁、または市外局番なしの短縮形
static NORTH_AMERICAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\+1|1)? *(\([2-9]\d{2}\)|[2-9]\d{2})[ .-]\d{3}[ .-]\d{4}$|^(\+1|1)? *\d{3}[ .-]\d{4}$",
    )
    .expect("valid north american regex")
});

/// 国際形式: +と1〜3桁の国番号（先頭は非ゼロ）、区切りを挟んで数字グループが続く
static INTERNATIONAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{0,2}[ ().-]+\d+([ ().-]*\d+)*[ ().-]*$")
        .expect("valid international regex")
});

/// IDDプレフィクス形式: 011に続く数字のみ
static IDD_PREFIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^011\d+$").expect("valid idd regex"));

/// 2桁×4グループ、または4桁×2グループ
static GROUPED_PAIRS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}[ .-]){3}\d{2}$|^\d{4}[ .-]\d{4}$").expect("valid grouped pairs regex")
});

/// 汎用グループ形式: 区切り文字1つで連結された数字グループ列
static GENERAL_GROUPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+([ .-]\d+)+$").expect("valid general grouped regex"));

/// 構造パターン一覧（any-match、列挙順は結果に影響しない）
static PATTERNS: [(&str, &Lazy<Regex>); 6] = [
    ("extension", &EXTENSION),
    ("north_american", &NORTH_AMERICAN),
    ("international", &INTERNATIONAL),
    ("idd_prefixed", &IDD_PREFIXED),
    ("grouped_pairs", &GROUPED_PAIRS),
    ("general_grouped", &GENERAL_GROUPED),
];

/// 構造パターン一覧を返す（テスト・診断用）
pub fn patterns() -> &'static [(&'static str, &'static Lazy<Regex>)] {
    &PATTERNS
}

fn check_charset(input: &str) -> Option<ValidationKind> {
    if CHARSET.is_match(input) {
        None
    } else {
        Some(ValidationKind::InvalidCharacters)
    }
}

fn check_digit_count(input: &str) -> Option<ValidationKind> {
    let digits = input.chars().filter(|c| c.is_ascii_digit()).count();
    if (MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
        None
    } else {
        Some(ValidationKind::DigitCountOutOfRange)
    }
}

fn check_structure(input: &str) -> Option<ValidationKind> {
    if PATTERNS.iter().any(|(_, pattern)| pattern.is_match(input)) {
        None
    } else {
        Some(ValidationKind::UnrecognizedFormat)
    }
}

static RULES: [Rule; 3] = [
    Rule {
        name: "charset",
        check: check_charset,
    },
    Rule {
        name: "digit_count",
        check: check_digit_count,
    },
    Rule {
        name: "structure",
        check: check_structure,
    },
];

/// 電話番号ルール列（宣言順に評価される）
pub fn rules() -> &'static [Rule] {
    &RULES
}

fn message_for(kind: ValidationKind) -> &'static str {
    match kind {
        ValidationKind::InvalidCharacters => "Invalid characters in phone number",
        ValidationKind::DigitCountOutOfRange => "Phone number must have between 5 and 15 digits",
        ValidationKind::UnrecognizedFormat => "Phone number does not match any acceptable format",
        _ => "Invalid phone number",
    }
}

/// 電話番号を検証する
///
/// 受理時は入力をそのまま返す（整形・正規化しない）。
pub fn validate(input: &str) -> Result<&str, ValidationError> {
    run_rules(FIELD, &RULES, message_for, input)
}
