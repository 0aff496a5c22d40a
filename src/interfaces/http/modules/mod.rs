//! Feature modules, one per resource

pub mod categories;
pub mod health;
pub mod metrics;
pub mod questions;
pub mod quizzes;
pub mod request_id;

use std::sync::Arc;

use crate::application::TriviaService;

/// State shared by the trivia handlers
#[derive(Clone)]
pub struct TriviaState {
    pub service: Arc<TriviaService>,
}
