//! Question DTOs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Category, NewQuestion, Question};

/// A trivia question as sent over the wire
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    /// Category id
    pub category: i32,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

pub fn to_dtos(questions: Vec<Question>) -> Vec<QuestionDto> {
    questions.into_iter().map(Into::into).collect()
}

/// Category id → category type. Serialized as a JSON object keyed by id.
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Page of all questions
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    /// Count of all questions, not just this page
    pub total_questions: u64,
    /// Category id → type
    pub categories: BTreeMap<i32, String>,
    /// Always `null` for this listing
    pub current_category: Option<String>,
}

/// Request body for creating a question. All four fields are required.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionRequest {
    #[validate(required)]
    pub question: Option<String>,
    #[validate(required)]
    pub answer: Option<String>,
    #[validate(required)]
    pub difficulty: Option<i32>,
    /// Category id; not checked against existing categories
    #[validate(required)]
    pub category: Option<i32>,
}

impl CreateQuestionRequest {
    /// `None` if any field is missing.
    pub fn into_new_question(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question?,
            answer: self.answer?,
            difficulty: self.difficulty?,
            category: self.category?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    /// Id assigned to the new question
    pub created: i32,
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    /// Id of the deleted question
    pub deleted: i32,
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
}

/// Request body for searching questions
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct SearchQuestionsRequest {
    /// Case-insensitive substring to look for in the question text
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    /// Number of matching questions
    pub total_questions: u64,
    /// Always `null` for search results
    pub current_category: Option<String>,
}
