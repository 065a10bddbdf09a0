//! HTTP 实现 - 基础设施层
//!
//! 持有唯一的 `reqwest::Client`，只暴露上传与生成两个能力

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::EndpointError;
use crate::infrastructure::backend::WorksheetBackend;
use crate::models::{GenerationRequest, SourceAsset, UploadReceipt, WorksheetResponse};

/// 基于 HTTP 的远端服务
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    upload_url: String,
    generate_url: String,
}

impl HttpBackend {
    /// 按配置创建客户端，超时由传输层负责
    pub fn new(config: &Config) -> Result<Self, EndpointError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// 使用已有的客户端
    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            upload_url: config.upload_url(),
            generate_url: config.generate_url(),
        }
    }

    /// 非成功状态码转为错误，响应文本作为错误详情
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, EndpointError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = error_body(resp.text().await);
        Err(EndpointError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl WorksheetBackend for HttpBackend {
    #[instrument(level = "debug", skip(self, asset), fields(file_id = %asset.asset_id()))]
    async fn upload(&self, asset: &SourceAsset) -> Result<UploadReceipt, EndpointError> {
        let part = Part::bytes(asset.bytes().to_vec())
            .file_name(asset.name().to_string())
            .mime_str(asset.content_type())?;

        let form = Form::new()
            .text("file_id", asset.asset_id().to_string())
            .part("file", part);

        let resp = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;

        // 回执只用于日志，解析失败不影响上传结果
        let text = resp.text().await.unwrap_or_default();
        let receipt = serde_json::from_str::<UploadReceipt>(&text).unwrap_or_default();
        debug!("上传回执: saved_as={:?}", receipt.saved_as);

        Ok(receipt)
    }

    #[instrument(level = "debug", skip(self, request), fields(num_sets = request.num_sets()))]
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<WorksheetResponse, EndpointError> {
        let resp = self
            .client
            .post(&self.generate_url)
            .json(request)
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;

        let text = resp.text().await?;
        serde_json::from_str::<WorksheetResponse>(&text)
            .map_err(|e| EndpointError::Decode(e.to_string()))
    }
}

/// 错误响应的正文，读取失败时保留失败原因
fn error_body<E: std::fmt::Display>(read: Result<String, E>) -> String {
    match read {
        Ok(body) => body,
        Err(e) => format!("<响应读取失败: {e}>"),
    }
}
