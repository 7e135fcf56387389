//! serve サブコマンド
//!
//! 電話帳サーバーを起動します。

use clap::Args;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, default_value = "8000", env = "PHONEBOOKD_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "PHONEBOOKD_HOST")]
    pub host: String,
}

impl ServeArgs {
    /// バインド先アドレス文字列を組み立てる
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            port: crate::config::env_parse("PHONEBOOKD_PORT", 8000),
            host: crate::config::env_or("PHONEBOOKD_HOST", "0.0.0.0"),
        }
    }
}
