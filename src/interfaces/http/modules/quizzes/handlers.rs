//! Quiz REST API handler

use axum::extract::State;
use axum::Json;

use super::dto::{QuizRequest, QuizResponse};
use crate::interfaces::http::common::{ApiError, ErrorBody, ValidatedJson};
use crate::interfaces::http::modules::questions::QuestionDto;
use crate::interfaces::http::modules::TriviaState;

#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "Quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, or null when the quiz is exhausted", body = QuizResponse),
        (status = 422, description = "Malformed quiz request", body = ErrorBody)
    )
)]
pub async fn next_question(
    State(state): State<TriviaState>,
    body: Result<ValidatedJson<QuizRequest>, ApiError>,
) -> Result<Json<QuizResponse>, ApiError> {
    // Every malformed body is a 422 here, including unparseable JSON.
    let ValidatedJson(req) = body.map_err(|_| ApiError::Unprocessable)?;
    let category = req.category_id();
    let previous = req.previous_questions.unwrap_or_default();

    let question = state
        .service
        .next_quiz_question(&previous, category)
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(Json(QuizResponse {
        success: true,
        question: question.map(QuestionDto::from),
    }))
}
