//! Application services

mod trivia;

pub use trivia::{CategoryQuestions, CreatedQuestion, QuestionListing, QuestionPage, TriviaService};
