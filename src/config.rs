/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 网关地址（上传与生成接口共用）
    pub api_base_url: String,
    /// 上传接口路径
    pub upload_path: String,
    /// 练习卷生成接口路径
    pub generate_path: String,
    /// 单个请求的超时时间（秒），超时按传输错误处理
    pub request_timeout_secs: u64,
    /// 是否显示详细日志（输出完整请求体）
    pub verbose_logging: bool,
    /// 表单预设 TOML 文件路径
    pub preset_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            upload_path: "/upload".to_string(),
            generate_path: "/image/worksheet".to_string(),
            request_timeout_secs: 120,
            verbose_logging: false,
            preset_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("WORKSHEET_API_BASE").unwrap_or(default.api_base_url),
            upload_path: std::env::var("WORKSHEET_UPLOAD_PATH").unwrap_or(default.upload_path),
            generate_path: std::env::var("WORKSHEET_GENERATE_PATH").unwrap_or(default.generate_path),
            request_timeout_secs: std::env::var("WORKSHEET_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            preset_path: std::env::var("WORKSHEET_PRESET").ok().or(default.preset_path),
        }
    }

    /// 拼接上传接口完整地址
    pub fn upload_url(&self) -> String {
        join_url(&self.api_base_url, &self.upload_path)
    }

    /// 拼接生成接口完整地址
    pub fn generate_url(&self) -> String {
        join_url(&self.api_base_url, &self.generate_path)
    }
}

/// 拼接基础地址与路径，避免出现重复或缺失的 `/`
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
