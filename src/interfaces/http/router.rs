//! API router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    http::{header, Method},
    middleware,
    routing::{delete, get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::TriviaService;
use crate::interfaces::http::common::{
    method_not_allowed_fallback, not_found_fallback, ErrorBody,
};
use crate::interfaces::http::modules::{
    categories, health, metrics, questions, quizzes, request_id, TriviaState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::list_categories,
        categories::category_questions,
        questions::list_questions,
        questions::create_question,
        questions::search_questions,
        questions::delete_question,
        quizzes::next_question,
    ),
    components(
        schemas(
            ErrorBody,
            health::HealthResponse,
            health::DatabaseHealth,
            questions::QuestionDto,
            questions::QuestionListResponse,
            questions::CreateQuestionRequest,
            questions::CreateQuestionResponse,
            questions::DeleteQuestionResponse,
            questions::SearchQuestionsRequest,
            questions::SearchQuestionsResponse,
            categories::CategoriesResponse,
            categories::CategoryQuestionsResponse,
            quizzes::QuizRequest,
            quizzes::QuizCategory,
            quizzes::QuizResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database reachability"),
        (name = "Categories", description = "Question categories and per-category listings"),
        (name = "Questions", description = "Listing, search, creation and deletion of questions"),
        (name = "Quizzes", description = "Random question selection for quiz play"),
    ),
    info(
        title = "Trivia API",
        version = "1.0.0",
        description = "Trivia questions and categories over JSON",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Create the API router with all routes.
///
/// `/metrics` is mounted and requests are counted only when a Prometheus
/// handle is supplied.
pub fn create_api_router(
    service: Arc<TriviaService>,
    db: DatabaseConnection,
    prometheus: Option<PrometheusHandle>,
) -> Router {
    let trivia_state = TriviaState {
        service: service.clone(),
    };

    let trivia_routes = Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(categories::category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/{question_id}", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::next_question))
        .with_state(trivia_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db,
            service,
            started_at: Arc::new(Instant::now()),
        });

    let swagger_routes =
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(trivia_routes);

    if let Some(handle) = prometheus {
        router = router
            .route_layer(middleware::from_fn(metrics::http_metrics_middleware))
            .merge(
                Router::new()
                    .route("/metrics", get(metrics::prometheus_metrics))
                    .with_state(metrics::MetricsState { handle }),
            );
    }

    router
        .method_not_allowed_fallback(method_not_allowed_fallback)
        .fallback(not_found_fallback)
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
