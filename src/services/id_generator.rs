//! 标识符生成 - 业务能力层
//!
//! 为每个选中的文件生成 `upload-<毫秒时间戳>-<slug>` 形式的标识符

use regex::Regex;
use std::sync::LazyLock;

/// slug 部分的最大长度
pub const SLUG_MAX_LEN: usize = 40;

static EXTENSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.[^/.]+$").unwrap());
static UNSAFE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\-]+").unwrap());

/// 按当前时间生成标识符
pub fn generate_id_for(file_name: &str) -> String {
    generate_id_at(file_name, chrono::Utc::now().timestamp_millis())
}

/// 按指定时间戳生成标识符
pub fn generate_id_at(file_name: &str, timestamp_millis: i64) -> String {
    format!("upload-{}-{}", timestamp_millis, slugify(file_name))
}

/// 去掉扩展名、转小写，连续的非 `[a-z0-9-]` 字符替换为单个 `-`，截断到 40 个字符
pub fn slugify(file_name: &str) -> String {
    let base = EXTENSION.replace(file_name, "");
    let lowered = base.to_lowercase();
    let safe = UNSAFE_RUN.replace_all(&lowered, "-");
    safe.chars().take(SLUG_MAX_LEN).collect()
}
