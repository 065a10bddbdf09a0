use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing::{info, warn};
use worksheet_submit::models::load_form_preset;
use worksheet_submit::{
    logger, Config, FormSession, HttpBackend, SourceAsset, SubmissionOrchestrator,
    SubmissionOutcome, SubmitAttempt,
};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 命令行参数为待上传的文件
    let paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        warn!("⚠️ 未指定文件，用法: worksheet_submit <文件>...");
    }

    let mut assets = Vec::with_capacity(paths.len());
    for path in &paths {
        assets.push(SourceAsset::from_path(path).await?);
    }

    let mut form = FormSession::default();
    if let Some(preset_path) = &config.preset_path {
        load_form_preset(&PathBuf::from(preset_path)).await?.apply(&mut form);
    }
    form.select_files(assets);

    let backend = HttpBackend::new(&config)?;
    let orchestrator = SubmissionOrchestrator::with_config(backend, &config);

    match orchestrator.submit(&form).await {
        SubmitAttempt::Settled(SubmissionOutcome::Succeeded(resp)) => {
            info!("练习卷 ID: {}", resp.worksheet_id);
            for set in &resp.sets {
                info!(
                    "第 {} 套 - {} | {} 题 | 下载 {}: {}",
                    set.set_no,
                    set.difficulty,
                    set.items.len(),
                    set.artifact_file_name(),
                    set.download_url(&config.api_base_url)
                );
            }
            Ok(())
        }
        SubmitAttempt::Settled(SubmissionOutcome::Failed(e)) => Err(e.into()),
        SubmitAttempt::Settled(other) => bail!("提交状态异常: {:?}", other),
        SubmitAttempt::Rejected => bail!("已有提交进行中"),
    }
}
