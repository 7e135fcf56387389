//! 監査ログの非同期バッファライター
//!
//! mpscチャネルでレコードを受信し、バックグラウンドタスクがシンクへ
//! 追記する。リクエスト処理をブロックしない。チャネルが閉じられたら
//! 残りをすべて書き切って終了する。

use crate::audit::sink::AuditSink;
use crate::audit::types::AuditRecord;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// 監査ログライター設定
pub struct AuditLogWriterConfig {
    /// バッファ上限エントリ数。デフォルト: 1000
    pub buffer_capacity: usize,
}

impl Default for AuditLogWriterConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: std::env::var("PHONEBOOKD_AUDIT_BUFFER_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000),
        }
    }
}

/// 監査ログの非同期ライター
///
/// mpscチャネル経由でAuditRecordを受信し、シンクへ順次追記する。
/// Clone可能（senderのクローン）。
#[derive(Clone)]
pub struct AuditLogWriter {
    sender: mpsc::Sender<AuditRecord>,
}

impl AuditLogWriter {
    /// 新しいAuditLogWriterを作成し、バックグラウンドタスクを起動
    pub fn new(sink: Box<dyn AuditSink>, config: AuditLogWriterConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.buffer_capacity);

        tokio::spawn(Self::background_task(rx, sink));

        Self { sender: tx }
    }

    /// レコードをバッファに送信（非同期、ブロックしない）
    ///
    /// バッファ満杯・チャネル閉鎖時は警告ログを出して破棄する。
    pub fn send(&self, record: AuditRecord) {
        if let Err(e) = self.sender.try_send(record) {
            warn!("Failed to send audit record: {}", e);
        }
    }

    /// バックグラウンド書き込みタスク
    async fn background_task(mut rx: mpsc::Receiver<AuditRecord>, mut sink: Box<dyn AuditSink>) {
        while let Some(record) = rx.recv().await {
            let line = record.format_line();
            if let Err(e) = sink.append(&line).await {
                warn!("Failed to append audit record: {}. Entry lost: {}", e, line);
            }
        }
        // チャネルが閉じられた → 送信側は全てドロップ済み
        info!("Audit log writer background task stopped");
    }
}
