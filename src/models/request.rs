use serde::Serialize;

use crate::models::difficulty::Difficulty;
use crate::models::question_mix::QuestionMix;

/// 发送给生成接口的请求体
///
/// 只能由 `RequestBuilder` 构造，构造后不可修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    file_ids: Vec<String>,
    grade_bands: Vec<String>,
    num_sets: usize,
    difficulty_levels: Vec<Difficulty>,
    questions_per_set: u32,
    question_mix: QuestionMix,
    target_language: String,
}

impl GenerationRequest {
    pub(crate) fn new(
        file_ids: Vec<String>,
        grade_bands: Vec<String>,
        difficulty_levels: Vec<Difficulty>,
        questions_per_set: u32,
        question_mix: QuestionMix,
        target_language: String,
    ) -> Self {
        Self {
            file_ids,
            grade_bands,
            num_sets: difficulty_levels.len(),
            difficulty_levels,
            questions_per_set,
            question_mix,
            target_language,
        }
    }

    pub fn file_ids(&self) -> &[String] {
        &self.file_ids
    }

    pub fn grade_bands(&self) -> &[String] {
        &self.grade_bands
    }

    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    pub fn difficulty_levels(&self) -> &[Difficulty] {
        &self.difficulty_levels
    }

    pub fn questions_per_set(&self) -> u32 {
        self.questions_per_set
    }

    pub fn question_mix(&self) -> &QuestionMix {
        &self.question_mix
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }
}
