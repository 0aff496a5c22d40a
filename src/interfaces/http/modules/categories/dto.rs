//! Category DTOs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::interfaces::http::modules::questions::QuestionDto;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    /// Category id → type
    pub categories: BTreeMap<i32, String>,
}

/// Questions of one category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    /// Count of all questions in every category
    pub total_questions: u64,
    /// Type of the requested category
    pub current_category: String,
}
