pub mod services;

// Re-export key types for convenience
pub use services::{CategoryQuestions, CreatedQuestion, QuestionListing, QuestionPage, TriviaService};
