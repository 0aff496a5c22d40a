pub mod category;
pub mod question;
pub mod repositories;

// Re-export commonly used types
pub use category::{Category, CategoryRepository};
pub use question::{NewQuestion, Question, QuestionRepository};
pub use repositories::{DomainResult, RepositoryProvider};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
