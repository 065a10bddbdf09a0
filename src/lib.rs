//! # Worksheet Submit
//!
//! 练习卷生成的客户端编排：选择文件 → 配置套数与难度 → 上传 → 提交生成请求
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有网络资源，只暴露能力
//! - `WorksheetBackend` - 上传 / 生成两个远端能力
//! - `HttpBackend` - 唯一的 `reqwest::Client` 持有者
//!
//! ### ② 数据层（Models）
//! - `models/` - 文件、难度分配、题型分布、请求与响应
//! - `DifficultyPlan` - 统一 / 分段两种模式的难度分配
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `id_generator` - 生成文件标识符
//! - `UploadCoordinator` - 串行上传
//! - `RequestBuilder` - 校验并构建请求
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/` - 定义"一次提交"的完整流程
//! - `SubmissionOrchestrator` - 校验 → 上传 → 构建 → 提交 → 解析
//! - `SubmissionOutcome` - Idle / InFlight / Succeeded / Failed

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{Result, ValidationError, WorksheetError};
pub use infrastructure::{HttpBackend, WorksheetBackend};
pub use models::{
    Difficulty, DifficultyMode, DifficultyPlan, FormSession, GenerationRequest, QuestionMix,
    QuestionMixInput, SourceAsset, WorksheetResponse,
};
pub use services::RequestBuilder;
pub use workflow::{SubmissionOrchestrator, SubmissionOutcome, SubmitAttempt};
