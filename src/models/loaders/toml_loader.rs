use crate::models::difficulty::{Difficulty, DifficultyMode, DifficultyPlan};
use crate::models::form::FormSession;
use crate::models::question_mix::QuestionMixInput;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 表单预设，未填写的字段保持表单默认值
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormPreset {
    pub grade_bands: Option<String>,
    pub target_language: Option<String>,
    pub num_sets: Option<usize>,
    pub questions_per_set: Option<u32>,
    pub difficulty_mode: Option<DifficultyMode>,
    pub broadcast_difficulty: Option<Difficulty>,
    pub per_set_difficulties: Option<Vec<Difficulty>>,
    pub question_mix: Option<QuestionMixInput>,
}

impl FormPreset {
    /// 将预设应用到表单
    ///
    /// 先写入分段难度再调整套数，保证分段序列长度与套数一致
    pub fn apply(&self, form: &mut FormSession) {
        if let Some(bands) = &self.grade_bands {
            form.grade_bands = bands.clone();
        }
        if let Some(lang) = &self.target_language {
            form.target_language = lang.clone();
        }
        if let Some(levels) = &self.per_set_difficulties {
            let mode = form.difficulty.mode();
            let broadcast = form.difficulty.broadcast_level();
            form.difficulty = DifficultyPlan::per_set(levels.clone());
            form.difficulty.set_mode(mode);
            form.difficulty.set_broadcast_level(broadcast);
        }
        if let Some(n) = self.num_sets {
            form.set_num_sets(n);
        }
        if let Some(mode) = self.difficulty_mode {
            form.difficulty.set_mode(mode);
        }
        if let Some(level) = self.broadcast_difficulty {
            form.difficulty.set_broadcast_level(level);
        }
        if let Some(q) = self.questions_per_set {
            form.questions_per_set = q;
        }
        if let Some(mix) = self.question_mix {
            form.question_mix = mix;
        }
    }
}

/// 解析 TOML 文本
pub fn parse_form_preset(content: &str) -> Result<FormPreset> {
    let preset: FormPreset = toml::from_str(content).context("无法解析表单预设")?;
    Ok(preset)
}

/// 从 TOML 文件加载表单预设
pub async fn load_form_preset(toml_file_path: &Path) -> Result<FormPreset> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let preset: FormPreset = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    tracing::info!("已加载表单预设: {}", toml_file_path.display());

    Ok(preset)
}
