//! バリデーションエンジンの公開APIに対するユニットテスト

use phonebookd::validation::{name, phone, validate_person, ValidationKind};

// ---------------------------------------------------------------------------
// 氏名
// ---------------------------------------------------------------------------

#[test]
fn name_accepts_representative_real_names() {
    for input in [
        "Bruce Schneier",
        "O'Brien-Smith",
        "Conan O’Brien",
        "Anne-Marie Saint-Claire",
        "J. R. Tolkien",
        "Smith, John",
    ] {
        assert!(name::validate(input).is_ok(), "{input}");
    }
}

#[test]
fn name_rejections_carry_the_expected_kind() {
    let cases = [
        ("Bruce2 Schneier", ValidationKind::InvalidCharacters),
        ("", ValidationKind::InvalidCharacters),
        ("O''Brien", ValidationKind::ConsecutiveApostrophes),
        ("a b c d", ValidationKind::TooManyParts),
        ("Jean-Paul-Luc", ValidationKind::TooManyHyphens),
    ];
    for (input, expected) in cases {
        assert_eq!(name::validate(input).unwrap_err().kind, expected, "{input}");
    }
}

#[test]
fn name_boundary_exactly_three_parts_accepts() {
    assert!(name::validate("One Two Three").is_ok());
    assert_eq!(
        name::validate("One Two Three Four").unwrap_err().kind,
        ValidationKind::TooManyParts
    );
}

// ---------------------------------------------------------------------------
// 電話番号
// ---------------------------------------------------------------------------

#[test]
fn phone_accepts_one_example_per_pattern() {
    let cases = [
        ("12345", "extension"),
        ("+1(703) 111-2121", "north_american"),
        ("+44 20 7946 0958", "international"),
        ("0114981234567", "idd_prefixed"),
        ("12 34 56 78", "grouped_pairs"),
        ("123-456-7890", "general_grouped"),
    ];
    for (input, label) in cases {
        assert!(phone::validate(input).is_ok(), "{label}: {input}");
    }
}

#[test]
fn phone_rejections_carry_the_expected_kind() {
    let cases = [
        ("abc123", ValidationKind::InvalidCharacters),
        ("", ValidationKind::InvalidCharacters),
        ("1234", ValidationKind::DigitCountOutOfRange),
        ("12345678901234567", ValidationKind::DigitCountOutOfRange),
        ("123456789012345", ValidationKind::UnrecognizedFormat),
        ("+12345678", ValidationKind::UnrecognizedFormat),
    ];
    for (input, expected) in cases {
        assert_eq!(
            phone::validate(input).unwrap_err().kind,
            expected,
            "{input}"
        );
    }
}

#[test]
fn phone_digit_count_boundaries() {
    // ちょうど5桁と15桁は桁数チェックを通る
    assert!(phone::validate("12345").is_ok());
    assert!(phone::validate("+44 1234567890123").is_ok()); // 15桁の国際形式
    assert_eq!(
        phone::validate("+44 12345678901234").unwrap_err().kind, // 16桁
        ValidationKind::DigitCountOutOfRange
    );
}

#[test]
fn phone_pattern_list_names_all_six_alternatives() {
    let names: Vec<&str> = phone::patterns().iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        [
            "extension",
            "north_american",
            "international",
            "idd_prefixed",
            "grouped_pairs",
            "general_grouped"
        ]
    );
}

// ---------------------------------------------------------------------------
// validate_person（Add用の複合検証）
// ---------------------------------------------------------------------------

#[test]
fn validate_person_error_messages_match_api_contract() {
    let errors = validate_person("Bruce <Schneier>", "abc").unwrap_err();
    let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        rendered,
        [
            "full_name: Invalid characters in name",
            "phone_number: Invalid characters in phone number"
        ]
    );
}
