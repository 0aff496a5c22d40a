//! Question aggregate
//!
//! `Question.category` points at a `Category.id`, but nothing enforces it:
//! a question may outlive its category and keeps listing with the stale id.

pub mod model;
pub mod repository;

pub use model::{NewQuestion, Question};
pub use repository::QuestionRepository;
