pub mod asset;
pub mod difficulty;
pub mod form;
pub mod loaders;
pub mod question_mix;
pub mod request;
pub mod response;

pub use asset::SourceAsset;
pub use difficulty::{Difficulty, DifficultyMode, DifficultyPlan};
pub use form::{parse_grade_bands, FormSession};
pub use loaders::{load_form_preset, FormPreset};
pub use question_mix::{QuestionMix, QuestionMixInput, QuestionType};
pub use request::GenerationRequest;
pub use response::{GeneratedSet, UploadReceipt, WorksheetItem, WorksheetResponse};
