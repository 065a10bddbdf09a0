use std::path::Path;

use anyhow::{Context, Result};

use crate::services::id_generator;

/// 用户选中的源文件
///
/// 标识符在选中时生成，之后不再改变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAsset {
    name: String,
    bytes: Vec<u8>,
    asset_id: String,
}

impl SourceAsset {
    /// 创建文件并按当前时间生成标识符
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let asset_id = id_generator::generate_id_for(&name);
        Self {
            name,
            bytes,
            asset_id,
        }
    }

    /// 使用已确定的标识符创建文件
    pub fn with_id(name: impl Into<String>, bytes: Vec<u8>, asset_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bytes,
            asset_id: asset_id.into(),
        }
    }

    /// 从磁盘读取文件
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("无法读取文件: {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .with_context(|| format!("无效的文件路径: {}", path.display()))?;
        Ok(Self::new(name, bytes))
    }

    /// 显示文件名
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    /// 根据扩展名推断 MIME 类型，存储端据此决定保存的扩展名
    pub fn content_type(&self) -> &'static str {
        let ext = self
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => "application/pdf",
            "ppt" => "application/vnd.ms-powerpoint",
            "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "wav" => "audio/wav",
            "mp3" => "audio/mpeg",
            _ => "application/octet-stream",
        }
    }
}
