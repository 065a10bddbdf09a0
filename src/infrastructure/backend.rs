//! 远端能力接口 - 基础设施层
//!
//! 上传与生成两个远端能力的抽象，编排层只依赖这个 trait

use crate::error::EndpointError;
use crate::models::{GenerationRequest, SourceAsset, UploadReceipt, WorksheetResponse};

/// 远端练习卷服务
///
/// 职责：
/// - 以文件标识符为键上传单个文件
/// - 提交生成请求并返回解析后的结果
/// - 不认识表单，不处理流程顺序
#[allow(async_fn_in_trait)]
pub trait WorksheetBackend {
    /// 上传单个文件，非成功状态码返回 `EndpointError::Status`
    async fn upload(&self, asset: &SourceAsset) -> Result<UploadReceipt, EndpointError>;

    /// 提交生成请求
    async fn generate(&self, request: &GenerationRequest)
        -> Result<WorksheetResponse, EndpointError>;
}

impl<B: WorksheetBackend + ?Sized> WorksheetBackend for &B {
    async fn upload(&self, asset: &SourceAsset) -> Result<UploadReceipt, EndpointError> {
        (**self).upload(asset).await
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<WorksheetResponse, EndpointError> {
        (**self).generate(request).await
    }
}
