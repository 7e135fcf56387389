//! Property-based tests using proptest

use proptest::prelude::*;

use phonebookd::validation::{name, phone, ValidationKind};

// ---------------------------------------------------------------------------
// 氏名バリデーション
// ---------------------------------------------------------------------------

proptest! {
    /// 許可文字集合外の文字を1つでも含む文字列は常にInvalidCharactersで拒否される
    #[test]
    fn any_name_with_a_forbidden_char_is_rejected(
        prefix in "[A-Za-z]{0,8}",
        bad in prop::sample::select(vec!['0', '9', '_', '!', '@', '#', '/', '\\', '<', '\t', 'é', '中']),
        suffix in "[A-Za-z]{0,8}",
    ) {
        let input = format!("{prefix}{bad}{suffix}");
        let err = name::validate(&input).unwrap_err();
        prop_assert_eq!(err.kind, ValidationKind::InvalidCharacters);
    }

    /// 許可文字のみからなる1〜3語の名前は必ず受理される
    /// （アポストロフィ連続・多重ハイフンを含まない語のみ）
    #[test]
    fn simple_names_up_to_three_parts_are_accepted(
        parts in prop::collection::vec("[A-Za-z]{1,10}(-[A-Za-z]{1,10})?", 1..=3),
    ) {
        let input = parts.join(" ");
        prop_assert!(name::validate(&input).is_ok(), "{}", input);
    }

    /// 4語以上はTooManyPartsで拒否される
    #[test]
    fn four_or_more_parts_are_rejected(
        parts in prop::collection::vec("[A-Za-z]{1,10}", 4..=8),
    ) {
        let input = parts.join(" ");
        let err = name::validate(&input).unwrap_err();
        prop_assert_eq!(err.kind, ValidationKind::TooManyParts);
    }

    /// どの語であれハイフンが2個を超えればTooManyHyphens
    #[test]
    fn double_hyphen_token_is_rejected(
        a in "[A-Za-z]{1,6}",
        b in "[A-Za-z]{1,6}",
        c in "[A-Za-z]{1,6}",
    ) {
        let input = format!("{a}-{b}-{c}");
        let err = name::validate(&input).unwrap_err();
        prop_assert_eq!(err.kind, ValidationKind::TooManyHyphens);
    }

    /// 受理された入力は常に変更されずに返る（正規化なし）
    #[test]
    fn accepted_name_is_returned_verbatim(input in "[A-Za-z]{1,10}( [A-Za-z]{1,10}){0,2}") {
        if let Ok(output) = name::validate(&input) {
            prop_assert_eq!(output, input.as_str());
        }
    }
}

// ---------------------------------------------------------------------------
// 電話番号バリデーション
// ---------------------------------------------------------------------------

proptest! {
    /// 数字4桁以下はDigitCountOutOfRange（許可文字のみの場合）
    #[test]
    fn fewer_than_five_digits_is_digit_count(digits in "[0-9]{1,4}") {
        let err = phone::validate(&digits).unwrap_err();
        prop_assert_eq!(err.kind, ValidationKind::DigitCountOutOfRange);
    }

    /// 数字16桁以上はDigitCountOutOfRange
    #[test]
    fn more_than_fifteen_digits_is_digit_count(digits in "[0-9]{16,30}") {
        let err = phone::validate(&digits).unwrap_err();
        prop_assert_eq!(err.kind, ValidationKind::DigitCountOutOfRange);
    }

    /// 区切り1文字で連結された数字グループ列（合計5〜15桁）は汎用形式で受理される
    #[test]
    fn general_grouped_numbers_are_accepted(
        groups in prop::collection::vec("[0-9]{2,3}", 3..=4),
        sep in prop::sample::select(vec![" ", "-", "."]),
    ) {
        let input = groups.join(sep);
        prop_assert!(phone::validate(&input).is_ok(), "{}", input);
    }

    /// 許可文字集合外の文字を含む番号は常にInvalidCharacters
    #[test]
    fn any_phone_with_a_forbidden_char_is_rejected(
        prefix in "[0-9]{0,6}",
        bad in prop::sample::select(vec!['a', 'Z', '_', '/', ',', '\'', '*', '#']),
        suffix in "[0-9]{0,6}",
    ) {
        let input = format!("{prefix}{bad}{suffix}");
        let err = phone::validate(&input).unwrap_err();
        prop_assert_eq!(err.kind, ValidationKind::InvalidCharacters);
    }

    /// 受理された番号は常に変更されずに返る（整形なし）
    #[test]
    fn accepted_phone_is_returned_verbatim(groups in prop::collection::vec("[0-9]{2,3}", 3..=4)) {
        let input = groups.join("-");
        if let Ok(output) = phone::validate(&input) {
            prop_assert_eq!(output, input.as_str());
        }
    }
}
