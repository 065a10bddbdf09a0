//! 请求构建 - 业务能力层
//!
//! 只读取表单状态、构造请求体，不做任何 I/O

use crate::error::ValidationError;
use crate::models::{parse_grade_bands, Difficulty, FormSession, GenerationRequest, QuestionMix};

/// 通过校验的表单快照，等待上传完成后补上文件标识符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    grade_bands: Vec<String>,
    difficulty_levels: Vec<Difficulty>,
    questions_per_set: u32,
    question_mix: QuestionMix,
    target_language: String,
}

impl ValidatedForm {
    /// 使用已确定的文件标识符构造最终请求
    pub fn into_request(self, file_ids: Vec<String>) -> GenerationRequest {
        GenerationRequest::new(
            file_ids,
            self.grade_bands,
            self.difficulty_levels,
            self.questions_per_set,
            self.question_mix,
            self.target_language,
        )
    }
}

/// 请求构建器
pub struct RequestBuilder;

impl RequestBuilder {
    /// 按顺序校验，第一个失败即返回：
    /// 1. 至少选择一个文件
    /// 2. 年级至少一个非空项
    /// 3. 套数与每套题数为正
    pub fn validate(form: &FormSession) -> Result<ValidatedForm, ValidationError> {
        if form.assets.is_empty() {
            return Err(ValidationError::Missing { missing: "files" });
        }

        let grade_bands = parse_grade_bands(&form.grade_bands);
        if grade_bands.is_empty() {
            return Err(ValidationError::Missing {
                missing: "grade_bands",
            });
        }

        if form.num_sets() < 1 {
            return Err(ValidationError::NotPositive { field: "num_sets" });
        }
        if form.questions_per_set < 1 {
            return Err(ValidationError::NotPositive {
                field: "questions_per_set",
            });
        }

        let difficulty_levels = form.difficulty.effective_assignment();
        debug_assert_eq!(difficulty_levels.len(), form.num_sets());

        Ok(ValidatedForm {
            grade_bands,
            difficulty_levels,
            questions_per_set: form.questions_per_set,
            question_mix: form.question_mix.normalize(),
            target_language: form.target_language.clone(),
        })
    }

    /// 校验并直接使用表单中文件的标识符构建请求
    pub fn build(form: &FormSession) -> Result<GenerationRequest, ValidationError> {
        let file_ids = form
            .assets
            .iter()
            .map(|a| a.asset_id().to_string())
            .collect();
        Ok(Self::validate(form)?.into_request(file_ids))
    }
}
