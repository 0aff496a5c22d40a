//! Category REST API handlers

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;

use super::dto::{CategoriesResponse, CategoryQuestionsResponse};
use crate::interfaces::http::common::{ApiError, ErrorBody, PageQuery};
use crate::interfaces::http::modules::questions::{category_map, to_dtos};
use crate::interfaces::http::modules::TriviaState;

#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 404, description = "No categories stored", body = ErrorBody)
    )
)]
pub async fn list_categories(
    State(state): State<TriviaState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.service.list_categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    tag = "Categories",
    params(
        ("category_id" = i32, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of the category's questions", body = CategoryQuestionsResponse),
        (status = 404, description = "Category not found", body = ErrorBody)
    )
)]
pub async fn category_questions(
    State(state): State<TriviaState>,
    path: Result<Path<i32>, PathRejection>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(category_id) = path.map_err(|_| ApiError::NotFound)?;

    let listing = state
        .service
        .questions_in_category(category_id, query.page())
        .await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: to_dtos(listing.page.questions),
        total_questions: listing.page.total_questions,
        current_category: listing.category.kind,
    }))
}
