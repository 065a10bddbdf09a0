/// 日志工具模块
///
/// 提供提交流程的日志格式化和输出
use tracing::{debug, error, info};

use crate::models::GenerationRequest;
use crate::workflow::{AttemptCtx, SubmissionOutcome};

/// 错误详情在日志中的最大长度
const DETAIL_PREVIEW_LEN: usize = 200;

/// 记录提交开始
pub fn log_attempt_start(ctx: &AttemptCtx) {
    info!("{}", "=".repeat(60));
    info!("{} 🚀 开始提交", ctx);
    info!("{} 📁 文件数: {} | 📊 套数: {}", ctx, ctx.asset_count, ctx.num_sets);
    info!("{}", "=".repeat(60));
}

/// 记录请求摘要
///
/// # 参数
/// - `ctx`: 提交上下文
/// - `request`: 生成请求
/// - `verbose`: 是否以 info 级别输出完整请求体
pub fn log_request(ctx: &AttemptCtx, request: &GenerationRequest, verbose: bool) {
    let levels: Vec<&str> = request
        .difficulty_levels()
        .iter()
        .map(|d| d.as_str())
        .collect();
    info!(
        "{} 年级: {:?} | 难度: {:?} | 每套 {} 题 | 语言: {}",
        ctx,
        request.grade_bands(),
        levels,
        request.questions_per_set(),
        request.target_language()
    );
    let mix = request.question_mix();
    if mix.is_empty() {
        info!("{} 题型: 由服务端决定", ctx);
    } else {
        info!("{} 题型: {} 种, 共 {} 题", ctx, mix.len(), mix.total());
    }

    let payload = serde_json::to_string(request).unwrap_or_default();
    if verbose {
        info!("{} 请求体: {}", ctx, payload);
    } else {
        debug!("{} 请求体: {}", ctx, payload);
    }
}

/// 记录提交结果
pub fn log_outcome(ctx: &AttemptCtx, outcome: &SubmissionOutcome) {
    info!("{}", "─".repeat(60));
    match outcome {
        SubmissionOutcome::Succeeded(resp) => {
            info!(
                "{} ✅ 生成成功: {} (共 {} 套)",
                ctx,
                resp.worksheet_id,
                resp.sets.len()
            );
        }
        SubmissionOutcome::Failed(e) => {
            error!(
                "{} ❌ 提交失败 [{}]: {}",
                ctx,
                e.kind(),
                truncate_text(&e.to_string(), DETAIL_PREVIEW_LEN)
            );
        }
        SubmissionOutcome::Idle | SubmissionOutcome::InFlight => {}
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
