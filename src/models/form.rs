use crate::models::asset::SourceAsset;
use crate::models::difficulty::DifficultyPlan;
use crate::models::question_mix::QuestionMixInput;

/// 一次表单会话的全部输入
///
/// 由展示层持有并修改，提交时按值/引用交给 `RequestBuilder` 校验
#[derive(Debug, Clone)]
pub struct FormSession {
    /// 按用户选择顺序排列
    pub assets: Vec<SourceAsset>,
    /// 原始年级输入，例如 `"3-4"` 或 `"5,6"`
    pub grade_bands: String,
    pub target_language: String,
    pub difficulty: DifficultyPlan,
    pub questions_per_set: u32,
    pub question_mix: QuestionMixInput,
}

impl Default for FormSession {
    fn default() -> Self {
        Self {
            assets: Vec::new(),
            grade_bands: "3-4".to_string(),
            target_language: "en".to_string(),
            difficulty: DifficultyPlan::default(),
            questions_per_set: 6,
            question_mix: QuestionMixInput::default(),
        }
    }
}

impl FormSession {
    /// 重新选择文件，替换原有选择
    pub fn select_files(&mut self, assets: Vec<SourceAsset>) {
        self.assets = assets;
    }

    pub fn num_sets(&self) -> usize {
        self.difficulty.num_sets()
    }

    /// 修改套数，同时调整难度分配
    pub fn set_num_sets(&mut self, num_sets: usize) {
        self.difficulty.set_num_sets(num_sets);
    }
}

/// 解析年级输入：按逗号分隔、去空白、丢弃空项
///
/// `3-4` 这样的区间保留为一个年级段
pub fn parse_grade_bands(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
