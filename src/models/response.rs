use serde::{Deserialize, Serialize};

use crate::config::join_url;

/// 生成接口的响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetResponse {
    pub worksheet_id: String,
    pub sets: Vec<GeneratedSet>,
}

/// 生成的一套练习
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSet {
    pub set_no: u32,
    pub difficulty: String,
    /// 相对网关地址的下载路径，例如 `/files/ws_1.pdf`
    pub printable_pdf_url: String,
    #[serde(default)]
    pub items: Vec<WorksheetItem>,
}

impl GeneratedSet {
    /// 完整下载地址
    pub fn download_url(&self, api_base_url: &str) -> String {
        if self.printable_pdf_url.starts_with("http://")
            || self.printable_pdf_url.starts_with("https://")
        {
            return self.printable_pdf_url.clone();
        }
        join_url(api_base_url, &self.printable_pdf_url)
    }

    /// 下载文件名（路径最后一段）
    pub fn artifact_file_name(&self) -> &str {
        self.printable_pdf_url
            .rsplit('/')
            .next()
            .unwrap_or(&self.printable_pdf_url)
    }
}

/// 单道题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetItem {
    #[serde(rename = "type")]
    pub item_type: String,
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<String>,
}

/// 上传接口的回执，仅用于日志
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub saved_as: Option<String>,
}
