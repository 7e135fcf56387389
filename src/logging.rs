//! ロギング初期化ユーティリティ
//!
//! `PHONEBOOKD_LOG_LEVEL`（なければ`RUST_LOG`、デフォルトinfo）で
//! フィルタする。`PHONEBOOKD_LOG_DIR`が設定されている場合は日次
//! ローテーションのファイル出力も併用する。

use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// ファイル出力のライターガード（プロセス終了まで保持する）
static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// tracingサブスクライバーを初期化する
///
/// 二重初期化はエラーになるため、プロセスの先頭で一度だけ呼ぶこと。
pub fn init() -> anyhow::Result<()> {
    let filter = env_filter();

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true));

    if let Ok(log_dir) = std::env::var("PHONEBOOKD_LOG_DIR") {
        let appender = tracing_appender::rolling::daily(&log_dir, "phonebookd.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        FILE_GUARD
            .set(guard)
            .map_err(|_| anyhow::anyhow!("logging already initialized"))?;
        registry
            .with(fmt::layer().with_ansi(false).with_writer(writer))
            .try_init()?;
    } else {
        registry.try_init()?;
    }

    Ok(())
}

fn env_filter() -> EnvFilter {
    if let Ok(level) = std::env::var("PHONEBOOKD_LOG_LEVEL") {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}
