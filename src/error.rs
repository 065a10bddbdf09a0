use thiserror::Error;

/// 提交流程错误类型
///
/// 所有错误最终都在 `SubmissionOrchestrator` 边界转换为 `Failed` 结果
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorksheetError {
    /// 本地校验失败（不会发起任何网络请求）
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),

    /// 某个文件上传失败，剩余文件不再上传
    #[error("上传失败 ({asset_name}): {cause}")]
    UploadFailed {
        asset_name: String,
        cause: UploadCause,
    },

    /// 生成接口拒绝了请求或服务端出错
    #[error("生成失败 (status={status:?}): {detail}")]
    GenerationFailed {
        status: Option<u16>,
        detail: String,
    },

    /// 网络层错误（连接失败、超时等）
    #[error("网络错误 ({phase}): {message}")]
    Transport { phase: Phase, message: String },
}

impl WorksheetError {
    /// 错误分类名称（用于展示层和日志）
    pub fn kind(&self) -> &'static str {
        match self {
            WorksheetError::Validation(_) => "ValidationError",
            WorksheetError::UploadFailed { .. } => "UploadFailed",
            WorksheetError::GenerationFailed { .. } => "GenerationFailed",
            WorksheetError::Transport { .. } => "TransportError",
        }
    }

    /// 创建上传失败错误
    pub fn upload_failed(asset_name: impl Into<String>, cause: UploadCause) -> Self {
        WorksheetError::UploadFailed {
            asset_name: asset_name.into(),
            cause,
        }
    }

    /// 将生成接口的错误映射到错误分类
    pub fn from_generation(err: EndpointError) -> Self {
        match err {
            EndpointError::Status { status, body } => WorksheetError::GenerationFailed {
                status: Some(status),
                detail: body,
            },
            EndpointError::Decode(detail) => WorksheetError::GenerationFailed {
                status: None,
                detail,
            },
            EndpointError::Transport(message) => WorksheetError::Transport {
                phase: Phase::Generate,
                message,
            },
        }
    }
}

/// 本地校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 缺少必填项（`files` / `grade_bands`）
    #[error("缺少 {missing}")]
    Missing { missing: &'static str },

    /// 数值必须为正
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },
}

impl ValidationError {
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::Missing { .. } => "missing",
            ValidationError::NotPositive { .. } => "must be positive",
        }
    }
}

/// 上传失败原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadCause {
    #[error("status={status}: {body}")]
    Status { status: u16, body: String },
    #[error("网络错误: {0}")]
    Transport(String),
}

/// 出错的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Upload,
    Generate,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Upload => write!(f, "upload"),
            Phase::Generate => write!(f, "generate"),
        }
    }
}

/// 基础设施层返回的接口错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    /// 接口返回非成功状态码，`body` 为响应文本
    #[error("status={status}: {body}")]
    Status { status: u16, body: String },
    /// 连接失败、超时等
    #[error("{0}")]
    Transport(String),
    /// 成功响应但无法解析
    #[error("响应解析失败: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for EndpointError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            EndpointError::Decode(err.to_string())
        } else {
            EndpointError::Transport(err.to_string())
        }
    }
}

/// 单个分段编辑失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DifficultyError {
    #[error("索引 {index} 超出范围 [0, {num_sets})")]
    IndexOutOfRange { index: usize, num_sets: usize },
    #[error("统一难度模式下不能单独修改某一套")]
    BroadcastActive,
}

/// 提交流程结果类型
pub type Result<T> = std::result::Result<T, WorksheetError>;
