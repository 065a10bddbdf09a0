//! 上传协调 - 业务能力层
//!
//! 按选择顺序逐个上传文件，遇到第一个失败即停止

use tracing::{info, warn};

use crate::error::{EndpointError, UploadCause, WorksheetError};
use crate::infrastructure::WorksheetBackend;
use crate::models::SourceAsset;

/// 上传协调器
///
/// 职责：
/// - 串行上传，保证失败时已上传的是一个确定的前缀
/// - 已上传的文件不回滚，由存储端负责清理
/// - 返回使用的标识符列表，顺序与选择顺序一致
pub struct UploadCoordinator<'a, B> {
    backend: &'a B,
}

impl<'a, B: WorksheetBackend> UploadCoordinator<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// 上传全部文件
    ///
    /// # 参数
    /// - `assets`: 按选择顺序排列的文件
    /// - `log_prefix`: 日志前缀（提交上下文）
    ///
    /// # 返回
    /// 返回已上传文件的标识符
    pub async fn upload_all(
        &self,
        assets: &[SourceAsset],
        log_prefix: &str,
    ) -> Result<Vec<String>, WorksheetError> {
        let total = assets.len();
        let mut file_ids = Vec::with_capacity(total);

        for (idx, asset) in assets.iter().enumerate() {
            info!(
                "{} 📤 上传 {}/{}: {} → {}",
                log_prefix,
                idx + 1,
                total,
                asset.name(),
                asset.asset_id()
            );

            if let Err(e) = self.backend.upload(asset).await {
                warn!("{} ❌ 上传失败 {}: {}", log_prefix, asset.name(), e);
                return Err(WorksheetError::upload_failed(asset.name(), upload_cause(e)));
            }

            file_ids.push(asset.asset_id().to_string());
        }

        info!("{} ✓ 全部 {} 个文件上传完成", log_prefix, total);
        Ok(file_ids)
    }
}

fn upload_cause(err: EndpointError) -> UploadCause {
    match err {
        EndpointError::Status { status, body } => UploadCause::Status { status, body },
        EndpointError::Transport(msg) | EndpointError::Decode(msg) => UploadCause::Transport(msg),
    }
}
