//! Question REST API handlers

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;

use super::dto::{
    category_map, to_dtos, CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse,
    QuestionListResponse, SearchQuestionsRequest, SearchQuestionsResponse,
};
use crate::interfaces::http::common::{ApiError, ErrorBody, PageQuery, ValidatedJson};
use crate::interfaces::http::modules::TriviaState;

#[utoipa::path(
    get,
    path = "/questions",
    tag = "Questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponse),
        (status = 404, description = "No questions on this page", body = ErrorBody)
    )
)]
pub async fn list_questions(
    State(state): State<TriviaState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let listing = state.service.list_questions(query.page()).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: to_dtos(listing.page.questions),
        total_questions: listing.page.total_questions,
        categories: category_map(listing.categories),
        current_category: None,
    }))
}

#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    tag = "Questions",
    params(
        ("question_id" = i32, Path, description = "Question ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 404, description = "Path is not a question id", body = ErrorBody),
        (status = 422, description = "Question does not exist or could not be deleted", body = ErrorBody)
    )
)]
pub async fn delete_question(
    State(state): State<TriviaState>,
    path: Result<Path<i32>, PathRejection>,
    Query(query): Query<PageQuery>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let Path(question_id) = path.map_err(|_| ApiError::NotFound)?;

    let page = state
        .service
        .delete_question(question_id, query.page())
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: question_id,
        questions: to_dtos(page.questions),
        total_questions: page.total_questions,
    }))
}

#[utoipa::path(
    post,
    path = "/questions",
    tag = "Questions",
    params(PageQuery),
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "Body is not JSON", body = ErrorBody),
        (status = 422, description = "Missing field or store failure", body = ErrorBody)
    )
)]
pub async fn create_question(
    State(state): State<TriviaState>,
    Query(query): Query<PageQuery>,
    ValidatedJson(req): ValidatedJson<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let new_question = req.into_new_question().ok_or(ApiError::Unprocessable)?;

    let created = state
        .service
        .create_question(new_question, query.page())
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.question.id,
        questions: to_dtos(created.page.questions),
        total_questions: created.page.total_questions,
    }))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "Questions",
    params(PageQuery),
    request_body = SearchQuestionsRequest,
    responses(
        (status = 200, description = "Matching questions", body = SearchQuestionsResponse),
        (status = 400, description = "Malformed body, or missing or empty searchTerm", body = ErrorBody),
        (status = 404, description = "Nothing matched", body = ErrorBody)
    )
)]
pub async fn search_questions(
    State(state): State<TriviaState>,
    Query(query): Query<PageQuery>,
    body: Result<ValidatedJson<SearchQuestionsRequest>, ApiError>,
) -> Result<Json<SearchQuestionsResponse>, ApiError> {
    // Any body that does not carry a string searchTerm is a 400 here.
    let ValidatedJson(req) = body.map_err(|_| ApiError::BadRequest)?;
    let page = state
        .service
        .search_questions(req.search_term.as_deref(), query.page())
        .await?;

    Ok(Json(SearchQuestionsResponse {
        success: true,
        questions: to_dtos(page.questions),
        total_questions: page.total_questions,
        current_category: None,
    }))
}
