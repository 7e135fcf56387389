//! 追記専用の監査シンク
//!
//! ファイル実装が本番用。インメモリ実装はテストで書き込まれた行を
//! 検査するために使う。

use crate::common::error::PhonebookError;
use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// 追記専用の監査シンク
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// 1行を追記する（改行はシンク側で付与する）
    async fn append(&mut self, line: &str) -> Result<(), PhonebookError>;
}

/// ファイルシンク
///
/// 各行にRFC 3339のタイムスタンプを前置して追記する。
pub struct FileAuditSink {
    file: tokio::fs::File,
}

impl FileAuditSink {
    /// 追記モードでファイルを開く（なければ作成する）
    pub async fn open(path: &Path) -> Result<Self, PhonebookError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|e| {
                PhonebookError::Internal(format!(
                    "Failed to open audit log {}: {}",
                    path.display(),
                    e
                ))
            })?;
        Ok(Self { file })
    }
}

#[async_trait]
impl AuditSink for FileAuditSink {
    async fn append(&mut self, line: &str) -> Result<(), PhonebookError> {
        let stamped = format!("{} - {}\n", chrono::Utc::now().to_rfc3339(), line);
        self.file
            .write_all(stamped.as_bytes())
            .await
            .map_err(|e| PhonebookError::Internal(format!("Failed to write audit log: {}", e)))?;
        self.file
            .flush()
            .await
            .map_err(|e| PhonebookError::Internal(format!("Failed to flush audit log: {}", e)))
    }
}

/// インメモリシンク（テスト用）
#[derive(Clone, Default)]
pub struct MemoryAuditSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAuditSink {
    /// 空のシンクを作る
    pub fn new() -> Self {
        Self::default()
    }

    /// 書き込まれた行への共有ハンドルを返す
    pub fn lines(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.lines)
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn append(&mut self, line: &str) -> Result<(), PhonebookError> {
        self.lines
            .lock()
            .map_err(|_| PhonebookError::Internal("Audit sink mutex poisoned".to_string()))?
            .push(line.to_string());
        Ok(())
    }
}
