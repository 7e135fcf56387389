//! ドメイン型定義

use serde::{Deserialize, Serialize};

/// 電話帳レコード
///
/// full_name と phone_number はどちらもストア全体で一意（UNIQUE制約で保証）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 氏名
    pub full_name: String,
    /// 電話番号（受理した生の文字列、整形しない）
    pub phone_number: String,
}
