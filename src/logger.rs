//! 日志初始化（tracing / tracing-subscriber）
//!
//! `RUST_LOG` 控制过滤级别，例如 `debug` 或 `info,worksheet_submit=debug`

use tracing_subscriber::EnvFilter;

/// 初始化日志，重复调用不会报错
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
