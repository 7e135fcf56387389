//! 監査ログシステム
//!
//! 監査対象の各操作について、最終結果を1行ずつ追記専用のシンクへ記録する

/// 監査レコードの型定義
pub mod types;

/// 追記専用シンク（ファイル・インメモリ）
pub mod sink;

/// 非同期バッファライター
pub mod writer;

/// 監査ログミドルウェア
pub mod middleware;
