//! Quiz DTOs

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::interfaces::http::modules::questions::QuestionDto;

/// Next-question request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct QuizRequest {
    /// Ids already served in this quiz
    #[validate(required)]
    pub previous_questions: Option<Vec<i32>>,
    /// Category selector; absent or `null` means every category
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Selected category id, `None` for "all categories"
    pub fn category_id(&self) -> Option<i32> {
        self.quiz_category
            .as_ref()
            .and_then(|c| c.id)
            .filter(|id| *id != 0)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct QuizCategory {
    /// Category id as a number or numeric string; 0 means every category
    #[serde(default, deserialize_with = "deserialize_category_id")]
    #[schema(value_type = Option<i32>)]
    pub id: Option<i32>,
    /// Category type, informational only
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategoryId {
    Number(i64),
    Text(String),
}

fn deserialize_category_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawCategoryId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawCategoryId::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("category id {n} out of range"))),
        Some(RawCategoryId::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i32>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid category id '{s}'")))
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    /// `null` once every eligible question has been served
    pub question: Option<QuestionDto>,
}
