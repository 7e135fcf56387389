//! データベースアクセス層
//!
//! SQLiteベースのデータ永続化

/// ユーザー管理
pub mod users;

/// 電話帳レコード管理
pub mod records;

/// データベースマイグレーション
pub mod migrations;

/// Repository traitパターン（ストア・ユーザーディレクトリの注入点）
pub mod traits;
