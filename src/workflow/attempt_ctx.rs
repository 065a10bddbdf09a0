//! 提交上下文
//!
//! 封装"这是第几次提交"这一信息，用作日志前缀

use std::fmt::Display;

/// 单次提交的上下文
#[derive(Debug, Clone)]
pub struct AttemptCtx {
    /// 提交序号（从 1 开始）
    pub attempt: u64,

    /// 文件数量
    pub asset_count: usize,

    /// 套数
    pub num_sets: usize,
}

impl AttemptCtx {
    pub fn new(attempt: u64, asset_count: usize, num_sets: usize) -> Self {
        Self {
            attempt,
            asset_count,
            num_sets,
        }
    }
}

impl Display for AttemptCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[提交 #{}]", self.attempt)
    }
}
