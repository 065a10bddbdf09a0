//! 提交编排 - 流程层
//!
//! 核心职责：把一次提交作为一个整体执行
//!
//! 流程顺序：
//! 1. 单飞检查（已有提交进行中则拒绝）
//! 2. 本地校验 → 失败直接 `Failed`，不发任何请求
//! 3. 按选择顺序串行上传
//! 4. 用已确定的标识符构建请求
//! 5. 提交生成请求并解析结果

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Result, WorksheetError};
use crate::infrastructure::WorksheetBackend;
use crate::models::{FormSession, WorksheetResponse};
use crate::services::{RequestBuilder, UploadCoordinator};
use crate::utils::logging;
use crate::workflow::attempt_ctx::AttemptCtx;

/// 提交状态，由编排器独占写入，展示层只读
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    InFlight,
    Succeeded(WorksheetResponse),
    Failed(WorksheetError),
}

impl SubmissionOutcome {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionOutcome::InFlight)
    }

    pub fn error(&self) -> Option<&WorksheetError> {
        match self {
            SubmissionOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&WorksheetResponse> {
        match self {
            SubmissionOutcome::Succeeded(r) => Some(r),
            _ => None,
        }
    }
}

/// 一次 `submit` 调用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// 已有提交进行中，本次未启动
    Rejected,
    /// 本次提交已结束
    Settled(SubmissionOutcome),
}

/// 进行中标记的守卫
///
/// 提交 future 被丢弃或流程中 panic 时，把状态清回 `Idle`，后续提交才能启动
struct InFlightGuard<'a> {
    outcome: &'a watch::Sender<SubmissionOutcome>,
    attempt: u64,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(outcome: &'a watch::Sender<SubmissionOutcome>, attempt: u64) -> Self {
        Self {
            outcome,
            attempt,
            armed: true,
        }
    }

    /// 写入最终结果并解除守卫
    fn settle(mut self, settled: SubmissionOutcome) {
        self.armed = false;
        self.outcome.send_replace(settled);
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!("[提交 #{}] ⚠️ 提交被中断，状态恢复为 Idle", self.attempt);
            self.outcome.send_replace(SubmissionOutcome::Idle);
        }
    }
}

/// 提交编排器
///
/// - 持有远端服务能力（backend）
/// - 持有唯一的可变状态 `SubmissionOutcome`
/// - 同一时刻最多一个提交进行中
pub struct SubmissionOrchestrator<B> {
    backend: B,
    outcome: watch::Sender<SubmissionOutcome>,
    attempts: AtomicU64,
    verbose_logging: bool,
}

impl<B: WorksheetBackend> SubmissionOrchestrator<B> {
    pub fn new(backend: B) -> Self {
        let (outcome, _) = watch::channel(SubmissionOutcome::Idle);
        Self {
            backend,
            outcome,
            attempts: AtomicU64::new(0),
            verbose_logging: false,
        }
    }

    pub fn with_config(backend: B, config: &Config) -> Self {
        Self {
            verbose_logging: config.verbose_logging,
            ..Self::new(backend)
        }
    }

    /// 订阅状态变化
    pub fn subscribe(&self) -> watch::Receiver<SubmissionOutcome> {
        self.outcome.subscribe()
    }

    /// 当前状态快照
    pub fn outcome(&self) -> SubmissionOutcome {
        self.outcome.borrow().clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.outcome.borrow().is_in_flight()
    }

    /// 把已结束的状态清回 `Idle`，进行中时不做任何事
    pub fn reset(&self) -> bool {
        self.outcome.send_if_modified(|outcome| {
            if outcome.is_in_flight() || *outcome == SubmissionOutcome::Idle {
                return false;
            }
            *outcome = SubmissionOutcome::Idle;
            true
        })
    }

    /// 执行一次提交
    ///
    /// 已有提交进行中时返回 `Rejected`，不影响进行中的那次
    pub async fn submit(&self, form: &FormSession) -> SubmitAttempt {
        let started = self.outcome.send_if_modified(|outcome| {
            if outcome.is_in_flight() {
                return false;
            }
            // 清掉上一次的结果
            *outcome = SubmissionOutcome::InFlight;
            true
        });

        if !started {
            warn!("⚠️ 已有提交进行中，忽略本次提交");
            return SubmitAttempt::Rejected;
        }

        let attempt = self.attempts.fetch_add(1, Ordering::Relaxed) + 1;
        let guard = InFlightGuard::new(&self.outcome, attempt);
        let ctx = AttemptCtx::new(attempt, form.assets.len(), form.num_sets());
        logging::log_attempt_start(&ctx);

        let settled = match self.run_pipeline(form, &ctx).await {
            Ok(response) => SubmissionOutcome::Succeeded(response),
            Err(e) => SubmissionOutcome::Failed(e),
        };

        logging::log_outcome(&ctx, &settled);
        guard.settle(settled.clone());
        SubmitAttempt::Settled(settled)
    }

    async fn run_pipeline(&self, form: &FormSession, ctx: &AttemptCtx) -> Result<WorksheetResponse> {
        let validated = RequestBuilder::validate(form)?;

        let prefix = ctx.to_string();
        let file_ids = UploadCoordinator::new(&self.backend)
            .upload_all(&form.assets, &prefix)
            .await?;

        let request = validated.into_request(file_ids);
        logging::log_request(ctx, &request, self.verbose_logging);

        info!("{} 🧾 正在请求生成 {} 套练习...", ctx, request.num_sets());
        let response = self
            .backend
            .generate(&request)
            .await
            .map_err(WorksheetError::from_generation)?;

        Ok(response)
    }
}
