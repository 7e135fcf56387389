//! 監査レコードの型定義

/// 監査レコード（1操作につき1件）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    /// 操作者のユーザー名（解決できなかった場合は "unknown"）
    pub username: String,
    /// 操作名（login / list / add / deleteByName / deleteByNumber）
    pub action: String,
    /// 追加情報（失敗理由、deleteByNumber成功時の氏名など）
    pub detail: Option<String>,
}

impl AuditRecord {
    /// シンクへ書き込む1行を組み立てる
    ///
    /// detailが空のときは " - " 以降を付与しない。
    pub fn format_line(&self) -> String {
        let mut line = format!("User: {} - Action: {}", self.username, self.action);
        if let Some(detail) = &self.detail {
            if !detail.is_empty() {
                line.push_str(" - ");
                line.push_str(detail);
            }
        }
        line
    }
}

/// 認証済み操作者（認証ミドルウェアがレスポンス拡張に格納する）
#[derive(Debug, Clone)]
pub struct AuditActor {
    /// 解決されたユーザー名（ログイン操作では試行されたユーザー名）
    pub username: String,
}

/// 操作の追加情報（ハンドラー/エラー変換がレスポンス拡張に格納する）
#[derive(Debug, Clone)]
pub struct AuditDetail(pub String);
