//! Router tests against a migrated in-memory SQLite database

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use trivia_api::application::TriviaService;
use trivia_api::infrastructure::database::migrator::SEED_QUESTIONS;
use trivia_api::{
    create_api_router, init_database, run_migrations, DatabaseConfig, SeaOrmRepositoryProvider,
};

async fn app() -> Router {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&db).await.unwrap();

    let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let service = Arc::new(TriviaService::new(repos, 10));
    create_api_router(service, db, None)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

fn assert_error(body: &Value, code: u16, message: &str) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
}

fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

async fn total_questions(app: &Router) -> u64 {
    let (_, body) = get(app, "/questions").await;
    body["total_questions"].as_u64().unwrap()
}

// ── Categories ─────────────────────────────────────────────────────

#[tokio::test]
async fn lists_categories_keyed_by_id() {
    let app = app().await;
    let (status, body) = get(&app, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"]["6"], "Sports");
    assert_eq!(body["categories"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn category_questions_are_scoped() {
    let app = app().await;
    let (status, body) = get(&app, "/categories/1/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["current_category"], "Science");
    assert_eq!(body["total_questions"], 19);
    assert_eq!(ids(&body), vec![16, 17, 18]);
    for q in body["questions"].as_array().unwrap() {
        assert_eq!(q["category"], 1);
    }
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let app = app().await;
    let (status, body) = get(&app, "/categories/1000/questions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404, "Resource not found");
}

#[tokio::test]
async fn non_numeric_category_id_is_not_found() {
    let app = app().await;
    let (status, body) = get(&app, "/categories/science/questions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404, "Resource not found");
}

// ── Listing ────────────────────────────────────────────────────────

#[tokio::test]
async fn first_page_has_ten_questions_and_categories() {
    let app = app().await;
    let (status, body) = get(&app, "/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());
    assert_eq!(body["total_questions"], 19);
    assert_eq!(body["categories"]["3"], "Geography");
    assert!(body["current_category"].is_null());
}

#[tokio::test]
async fn second_page_has_the_remaining_nine() {
    let app = app().await;
    let (status, body) = get(&app, "/questions?page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (11..=19).collect::<Vec<_>>());
    assert_eq!(body["total_questions"], 19);
}

#[tokio::test]
async fn page_beyond_the_end_is_not_found() {
    let app = app().await;
    for uri in ["/questions?page=3", "/questions?page=1000", "/questions?page=0"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_error(&body, 404, "Resource not found");
    }
}

#[tokio::test]
async fn non_numeric_page_falls_back_to_first() {
    let app = app().await;
    let (status, body) = get(&app, "/questions?page=abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body).first(), Some(&1));
}

// ── Delete ─────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_the_question() {
    let app = app().await;
    let (status, body) = send(&app, Method::DELETE, "/questions/5", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted"], 5);
    assert_eq!(body["total_questions"], 18);
    assert!(!ids(&body).contains(&5));

    // A second delete of the same id is unprocessable.
    let (status, body) = send(&app, Method::DELETE, "/questions/5", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, 422, "unprocessable");

    let (_, body) = get(&app, "/categories/5/questions").await;
    assert!(!ids(&body).contains(&5));
}

#[tokio::test]
async fn delete_of_missing_id_is_unprocessable() {
    let app = app().await;
    let (status, body) = send(&app, Method::DELETE, "/questions/1000", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, 422, "unprocessable");
    assert_eq!(total_questions(&app).await, 19);
}

// ── Create ─────────────────────────────────────────────────────────

#[tokio::test]
async fn create_adds_one_question() {
    let app = app().await;
    let (status, body) = post(
        &app,
        "/questions",
        json!({
            "question": "What is the capital of Uzbekistan?",
            "answer": "Tashkent",
            "difficulty": 2,
            "category": 3
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 20);
    let created = body["created"].as_i64().unwrap();
    assert!(created > 19);

    let (_, body) = get(&app, "/categories/3/questions").await;
    assert!(ids(&body).contains(&created));
}

#[tokio::test]
async fn ids_are_not_reused_after_deleting_the_newest() {
    let app = app().await;
    let (_, before) = get(&app, "/questions?page=2").await;
    let highest_seen = ids(&before).into_iter().max().unwrap();
    assert_eq!(highest_seen, 19);

    let (status, _) = send(&app, Method::DELETE, "/questions/19", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post(
        &app,
        "/questions",
        json!({"question": "Who painted the Sistine Chapel ceiling?", "answer": "Michelangelo", "difficulty": 2, "category": 2}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let created = body["created"].as_i64().unwrap();
    assert_ne!(created, 19);
    assert!(created > highest_seen);
    assert_eq!(body["total_questions"], 19);
}

#[tokio::test]
async fn create_with_missing_fields_is_unprocessable() {
    let app = app().await;
    for payload in [
        json!({}),
        json!({"question": "q", "answer": "a", "difficulty": 1}),
        json!({"question": "q", "answer": null, "difficulty": 1, "category": 1}),
    ] {
        let (status, body) = post(&app, "/questions", payload).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error(&body, 422, "unprocessable");
    }
    assert_eq!(total_questions(&app).await, 19);
}

#[tokio::test]
async fn create_with_wrong_types_is_unprocessable() {
    let app = app().await;
    let (status, _) = post(
        &app,
        "/questions",
        json!({"question": "q", "answer": "a", "difficulty": "hard", "category": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_with_malformed_json_is_bad_request() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/questions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"question\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ── Search ─────────────────────────────────────────────────────────

#[tokio::test]
async fn search_is_case_insensitive_and_counts_matches() {
    let app = app().await;
    let (status, body) = post(&app, "/questions/search", json!({"searchTerm": "A"})).await;

    let expected = SEED_QUESTIONS
        .iter()
        .filter(|(q, _, _, _)| q.to_lowercase().contains('a'))
        .count();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], expected as u64);
    assert!(body["current_category"].is_null());
    for q in body["questions"].as_array().unwrap() {
        assert!(q["question"].as_str().unwrap().to_lowercase().contains('a'));
    }
}

#[tokio::test]
async fn search_finds_single_question() {
    let app = app().await;
    let (status, body) = post(&app, "/questions/search", json!({"searchTerm": "penicillin"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![17]);
    assert_eq!(body["total_questions"], 1);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let app = app().await;
    let (status, body) = post(&app, "/questions/search", json!({"searchTerm": "%"})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404, "Resource not found");
}

#[tokio::test]
async fn empty_search_term_is_bad_request() {
    let app = app().await;
    for payload in [json!({"searchTerm": ""}), json!({})] {
        let (status, body) = post(&app, "/questions/search", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error(&body, 400, "bad request");
    }
}

#[tokio::test]
async fn malformed_search_body_is_bad_request() {
    let app = app().await;
    for payload in [
        json!({"searchTerm": 5}),
        json!({"searchTerm": ["a"]}),
        json!("a"),
        json!([]),
    ] {
        let (status, body) = post(&app, "/questions/search", payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_error(&body, 400, "bad request");
    }
}

#[tokio::test]
async fn search_matches_non_ascii_capitals_verbatim() {
    let app = app().await;
    let (status, body) = post(
        &app,
        "/questions",
        json!({"question": "Which ÉCOLE trained Monet?", "answer": "Académie Suisse", "difficulty": 3, "category": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created = body["created"].as_i64().unwrap();

    for term in ["ÉCOLE", "Which ÉCOLE", "which ÉCOLE"] {
        let (status, body) = post(&app, "/questions/search", json!({"searchTerm": term})).await;
        assert_eq!(status, StatusCode::OK, "{term}");
        assert_eq!(ids(&body), vec![created], "{term}");
        assert_eq!(body["total_questions"], 1);
    }
}

#[tokio::test]
async fn search_without_matches_is_not_found() {
    let app = app().await;
    let (status, _) = post(&app, "/questions/search", json!({"searchTerm": "xyzzy"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Quizzes ────────────────────────────────────────────────────────

#[tokio::test]
async fn quiz_respects_category_and_history() {
    let app = app().await;
    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"previous_questions": [16, 17], "quiz_category": {"id": "1", "type": "Science"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["id"], 18);
    assert_eq!(body["question"]["category"], 1);
}

#[tokio::test]
async fn quiz_over_all_categories_skips_previous() {
    let app = app().await;
    let previous: Vec<i64> = (1..=18).collect();
    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"previous_questions": previous, "quiz_category": {"id": 0, "type": "click"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 19);
}

#[tokio::test]
async fn exhausted_quiz_returns_null_question() {
    let app = app().await;
    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"previous_questions": [16, 17, 18], "quiz_category": {"id": 1}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["question"].is_null());
}

#[tokio::test]
async fn malformed_quiz_request_is_unprocessable() {
    let app = app().await;
    for payload in [
        json!({}),
        json!({"quiz_category": {"id": 1}}),
        json!({"previous_questions": [], "quiz_category": {"id": "science"}}),
    ] {
        let (status, body) = post(&app, "/quizzes", payload).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error(&body, 422, "unprocessable");
    }

    let (status, _) = send(&app, Method::POST, "/quizzes", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ── Routing and middleware ─────────────────────────────────────────

#[tokio::test]
async fn unsupported_method_is_405() {
    let app = app().await;
    let (status, body) = send(&app, Method::PUT, "/categories", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_error(&body, 405, "method not allowed");

    let (status, _) = get(&app, "/quizzes").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = app().await;
    let (status, body) = get(&app, "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404, "Resource not found");
}

#[tokio::test]
async fn responses_carry_cors_and_request_id() {
    let app = app().await;
    let request = Request::builder()
        .uri("/categories")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    assert!(response.headers().contains_key("x-request-id"));

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/questions")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(preflight).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "{methods}");
    }
    let headers = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(headers.contains("content-type"));
    assert!(headers.contains("authorization"));
}

#[tokio::test]
async fn health_reports_database_and_question_count() {
    let app = app().await;
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");
    assert_eq!(body["database"]["questions"], 19);
}

#[tokio::test]
async fn openapi_document_lists_trivia_paths() {
    let app = app().await;
    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/categories",
        "/categories/{category_id}/questions",
        "/questions",
        "/questions/search",
        "/questions/{question_id}",
        "/quizzes",
    ] {
        assert!(paths.contains_key(path), "{path}");
    }
}
